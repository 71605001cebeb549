pub mod a001_gl_class;
pub mod a002_gl_account_type;
pub mod a003_gl_account;
pub mod a004_bank_account;
pub mod a005_bank_transaction;
pub mod a006_customer;
pub mod a007_sales_order;
pub mod a008_item_category;
pub mod a009_item_unit;
pub mod a010_item_type;
pub mod a011_sales_group;
pub mod a012_sales_area;
pub mod a013_sales_type;
pub mod a014_recurrent_invoice;
pub mod a015_fiscal_year;
pub mod a016_payment_term;
pub mod a017_tax_group;
pub mod a018_stock_location;
pub mod a019_item;
pub mod common;
