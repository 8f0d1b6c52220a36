//! Text analysis module for Tasrif.
//!
//! This module provides the building blocks the corpus tools are made of:
//! char filters for Arabic orthographic clean-up, tokenizers, token filters,
//! analysis pipelines, and the word normalizers that stem or lemmatize.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
