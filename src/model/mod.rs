pub mod user;
pub mod banner;
pub mod appointment;
pub mod payment;
pub mod catalog;

use bson::oid::ObjectId;

/// Documents whose `_id` the read endpoints re-encode as a hex string.
pub trait Identified {
    fn take_id(&mut self) -> Option<ObjectId>;
}

macro_rules! impl_identified {
    ($($model:ty),* $(,)?) => {
        $(impl Identified for $model {
            fn take_id(&mut self) -> Option<ObjectId> {
                self.id.take()
            }
        })*
    };
}

impl_identified!(
    user::User,
    banner::Banner,
    diagnostic_test::DiagnosticTest,
    appointment::Appointment,
);
