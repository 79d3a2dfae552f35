//! Byte buffer primitives for the json-strict codec.
//!
//! The single export is [`ScratchBuf`], the growable byte buffer the parser
//! uses as a rollback-capable accumulation stack and the serializer uses as
//! its output accumulator.

mod scratch;

pub use scratch::ScratchBuf;
