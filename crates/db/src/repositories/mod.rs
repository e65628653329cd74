mod carrier_repo;
mod entity_repo;
mod shipping_method_repo;
mod tax_class_repo;

pub use carrier_repo::CarrierRepo;
pub use entity_repo::EntityRepo;
pub use shipping_method_repo::ShippingMethodRepo;
pub use tax_class_repo::TaxClassRepo;
