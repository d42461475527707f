// meshbridge-core/src/application/engines/mod.rs
//
// One translator per supported database engine. Each hand-codes its own
// field mapping.

pub mod mysql;

pub use mysql::MysqlTranslator;
