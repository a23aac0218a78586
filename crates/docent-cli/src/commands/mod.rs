pub mod ask;
pub mod audit;
pub mod chat;
pub mod clusters;
pub mod dashboard;
pub mod dispatch;
pub mod health;
pub mod history;
pub mod prompt;
pub mod shared;
pub mod sources;
pub mod trends;
pub mod welcome;
