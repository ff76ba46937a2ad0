mod review;

pub use review::{Review, ReviewWithContext};
