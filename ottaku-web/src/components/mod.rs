pub mod announcement;
pub mod category_bar;
pub mod empty_state;
pub mod footer;
pub mod gaming_card;
pub mod header;
pub mod news_card;
pub mod partner_card;
pub mod quiz_winner_card;
pub mod search_box;
pub mod skeleton;
pub mod slide_menu;
pub mod winner_item;
