//! Linkage tables, leaf lookup and dendrogram layout. No drawing here.

pub mod dendrogram;
pub mod linkage;
pub mod lookup;
pub mod palette;
