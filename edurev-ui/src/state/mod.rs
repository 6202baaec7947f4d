//! State Management
//!
//! Global application state, the data source selection and the
//! signal-backed submission form store.

pub mod data;
pub mod form;
pub mod global;

pub use data::DataSource;
pub use form::SignalFormStore;
pub use global::provide_global_state;
