//! Report composition and delivery: batch summary, HTML body, SMTP mail.

pub mod html;
pub mod mailer;
pub mod summary;

pub use mailer::Mailer;
pub use summary::{best_zone_score, buy_tickers, is_last_day_of_month, subject_line};
