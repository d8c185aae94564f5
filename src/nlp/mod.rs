//! Natural Language Processing components
//!
//! This module provides sentence segmentation, stopword filtering, and
//! term-frequency vector construction.

pub mod sentence;
pub mod stopwords;
pub mod term_vector;
