//! Stand-ins for the services a real storefront would call.

pub mod mock_desk;
