pub mod connection;
pub mod invoices;
pub mod leads;
