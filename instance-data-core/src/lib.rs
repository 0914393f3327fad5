#![doc = "instance-data-core: core logic library for instance-data."]

//! This crate contains the data model, serializer and sinks used to publish
//! cloud instance-type data, either as generated Go sources or as public
//! objects in a bucket.
//!
//! # Usage
//! The CLI crate builds a [`config::PublishConfig`], picks a [`sink::Sink`] and
//! hands both to [`publish::publish_all`]. Network clients live outside this
//! crate and plug in through [`contract::ObjectStore`].

pub mod config;
pub mod contract;
pub mod document;
pub mod emit;
pub mod error;
pub mod provider;
pub mod publish;
pub mod sink;
pub mod source;
pub mod upload;

pub use error::PublishError;
pub use provider::CloudProvider;
