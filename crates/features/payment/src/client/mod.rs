mod admin;
mod checkout;

pub use admin::AdminDashboard;
pub use checkout::Checkout;
