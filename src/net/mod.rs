//! Network-facing helpers for the external cloud collaborator.

pub mod supabase;
