//! Browser client for the ZappyLearn worksheet service: pick a mood and a
//! subject, get a worksheet of questions back, download it as a PDF.

pub mod api;
pub mod app;
pub mod browser;
pub mod config;
pub mod error;
pub mod flow;
pub mod model;
pub mod state;
pub mod toast;
pub mod view_model;

pub use app::App;
pub use error::{ClientError, Result};
