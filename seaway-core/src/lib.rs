//! Seaway Core - AIS sentence parsing and vessel kinematics
//!
//! This crate contains the platform-independent logic for turning raw AIS
//! receiver lines into structured messages, and for reasoning about the
//! motion of the vessels those messages describe. It performs no I/O:
//! callers feed it lines and decoded values, and get back plain data.
//!
//! # Architecture
//!
//! - **nmea**: tag-block and sentence parsing, checksums, talker lookup
//! - **message**: [`AisMessage`], the composition of an optional tag block
//!   and a sentence
//! - **vessel**: immutable [`VesselPosition`] snapshots and their builder
//! - **kinematics**: constant-velocity prediction and the collision-time
//!   solver
//!
//! # Example
//!
//! ```
//! use seaway_core::AisMessage;
//!
//! let line = "\\c:1357563697*00\\!AIVDM,1,1,,B,13b2AH8000bkvNajJ=1ov2C>25`4,0*0F";
//! let message = AisMessage::parse(line).unwrap();
//! assert_eq!(message.channel(), "B");
//! assert_eq!(message.time(), Some(1_357_563_697_000));
//! ```

pub mod error;
pub mod kinematics;
pub mod message;
pub mod nmea;
pub mod vessel;

pub use error::{InsufficientData, ParseError, PreconditionError, Side};
pub use kinematics::{Times, Vector};
pub use message::{AisMessage, Timestamped};
pub use nmea::{FragmentGroup, Sentence, TagBlock, Talker, TalkerTable};
pub use vessel::{
    Identifier, Mmsi, NavigationalStatus, VesselClass, VesselPosition, VesselPositionBuilder,
};
