//! Smoothing filters

mod mean;

pub use mean::mean_filter;
