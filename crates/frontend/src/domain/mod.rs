pub mod a030_chat;
