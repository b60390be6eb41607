pub mod brand;
pub mod product;
pub mod record;

pub use brand::Brand;
pub use product::Product;
pub use record::Record;
