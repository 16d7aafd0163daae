//! Page Components

mod landing;

pub use landing::LandingPage;
