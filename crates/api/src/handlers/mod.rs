pub mod carriers;
pub mod shipping_methods;
pub mod tax_classes;
