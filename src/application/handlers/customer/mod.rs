//! Customer use cases.

pub mod create_customer;
pub mod get_customer_by_cpf;

pub use create_customer::{CreateCustomerCommand, CreateCustomerHandler, CustomerDetails};
pub use get_customer_by_cpf::GetCustomerByCpfHandler;
