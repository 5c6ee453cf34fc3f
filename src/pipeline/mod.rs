// Analysis pipeline — caller-side sequencing of the cleaning policies.

pub mod analysis;
