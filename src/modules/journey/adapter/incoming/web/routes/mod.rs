mod create_journey_item;
mod delete_journey_item;
mod get_journey;
mod update_journey_item;

pub use create_journey_item::{create_journey_item_handler, CreateJourneyItemRequest};
pub use delete_journey_item::delete_journey_item_handler;
pub use get_journey::get_journey_handler;
pub use update_journey_item::{update_journey_item_handler, UpdateJourneyItemRequest};

pub use create_journey_item::__path_create_journey_item_handler;
pub use delete_journey_item::__path_delete_journey_item_handler;
pub use get_journey::__path_get_journey_handler;
pub use update_journey_item::__path_update_journey_item_handler;
