//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Where [`HttpClassifier::new`](crate::client::HttpClassifier::new) sends its classification requests.
/// Feel free to override it when initing this library.
pub static CLASSIFIER_ENDPOINT: Lazy<Arc<Mutex<String>>> =
    Lazy::new(|| Arc::new(Mutex::new("http://localhost:5000/categorize".to_string())));
