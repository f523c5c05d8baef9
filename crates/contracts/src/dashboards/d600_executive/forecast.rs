use super::dto::TrendPoint;

/// Merges forecast points into the monthly trend by month name.
///
/// Months already present keep their actuals and pick up the forecast value
/// (filling revenue/profit only where the trend had none). Months that exist
/// only in the forecast are appended in forecast order. An empty forecast
/// leaves the trend untouched.
pub fn merge_forecast(trend: &mut Vec<TrendPoint>, forecast: Vec<TrendPoint>) {
    for point in forecast {
        match trend.iter_mut().find(|p| p.name == point.name) {
            Some(existing) => {
                existing.forecast = point.forecast.or(existing.forecast);
                existing.revenue = existing.revenue.or(point.revenue);
                existing.profit = existing.profit.or(point.profit);
            }
            None => trend.push(point),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, revenue: Option<f64>, forecast: Option<f64>) -> TrendPoint {
        TrendPoint {
            name: name.to_string(),
            revenue,
            profit: revenue.map(|r| r / 10.0),
            forecast,
        }
    }

    #[test]
    fn test_merge_keeps_actuals_and_appends_future_months() {
        let mut trend = vec![point("Oct", Some(100.0), None), point("Nov", Some(120.0), None)];
        let forecast = vec![
            point("Nov", Some(999.0), Some(120.0)),
            point("Dec", None, Some(130.0)),
        ];

        merge_forecast(&mut trend, forecast);

        assert_eq!(trend.len(), 3);
        assert_eq!(trend[0].forecast, None);
        assert_eq!(trend[1].revenue, Some(120.0));
        assert_eq!(trend[1].forecast, Some(120.0));
        assert_eq!(trend[2].name, "Dec");
        assert_eq!(trend[2].revenue, None);
        assert_eq!(trend[2].forecast, Some(130.0));
    }

    #[test]
    fn test_empty_forecast_is_a_no_op() {
        let mut trend = vec![point("Jan", Some(1.0), None)];
        let before = trend.clone();
        merge_forecast(&mut trend, Vec::new());
        assert_eq!(trend, before);
    }
}
