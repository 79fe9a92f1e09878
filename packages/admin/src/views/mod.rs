mod dashboard;
pub use dashboard::Dashboard;

mod login;
pub use login::Login;

mod members;
pub use members::Members;

mod events;
pub use events::Events;

mod nav;
pub use nav::AdminNav;
