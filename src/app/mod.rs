pub mod dispatch;
mod interactive;
