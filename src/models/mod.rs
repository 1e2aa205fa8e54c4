pub mod appointment;
pub mod message;
pub mod post;
pub mod user;

pub use appointment::{Appointment, AppointmentRequest, AppointmentStatus};
pub use message::ContactMessage;
pub use post::Post;
pub use user::StaffUser;
