pub mod admin;
pub mod contact;
pub mod copy;
pub mod discounts;
pub mod home;
pub mod invoices;
pub mod rooms;
pub mod widget;

pub use admin::{admin_leads_page, AdminLeadsVm};
pub use contact::{contact_page, ContactCardVm, ContactVm};
pub use copy::{copy_page, CopyVm};
pub use discounts::{discounts_page, DiscountsVm};
pub use home::{home_page, HomeVm};
pub use invoices::{invoices_page, InvoicesVm};
pub use rooms::{rooms_page, RoomCardVm};
pub use widget::{widget_fragment, WidgetVm};
