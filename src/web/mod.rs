//! HTTP Module
//!
//! The public face of the service, served with Axum.
//!
//! ## Routes
//! - **`/`**: Landing page for browsers, a usage hint for command-line clients.
//! - **`/<word>`**: Noun lookup, any method.
//! - **`/game/random`**, **`/game/check/{en,ett}`**: The quiz.
//! - **`/robots.txt`**, **`/sitemap.xml`**, **`/favicon.ico`**: Fixed assets.
//!
//! Whether a client is a browser is decided from its `User-Agent`; browsers get
//! HTML and submit words through forms, everything else gets plain text and
//! submits words in the path.
//!
//! ## Submodules
//! - **`agent`**: User-agent sniffing.
//! - **`assets`**: Static bodies and their handlers.
//! - **`handlers`**: Lookup and quiz request handlers.
//! - **`router`**: Route table and middleware stack.

pub mod agent;
pub mod assets;
pub mod handlers;
pub mod router;
