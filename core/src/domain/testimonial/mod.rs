pub mod columns;
pub mod entities;
