mod operations;
mod requests;
mod types;

pub use operations::parse_person_id;
pub use requests::{
    CreateCarRequest, CreateOrderRequest, CreatePersonRequest, UpdateCarRequest,
    UpdatePersonRequest,
};
pub use types::{Car, Order, OrderView, Person};
