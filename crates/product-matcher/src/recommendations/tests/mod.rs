mod catalog;
mod common;
mod ranking;
mod scoring;
