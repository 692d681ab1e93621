//! Remote mirror plumbing.

mod outbox;

pub use outbox::{FlushReport, MirrorWrite, NoopMirror, Outbox, RemoteMirror};
