mod notation;

pub use notation::{
    format_deal, format_deal_tag, parse_deal, parse_deal_tag, sort_hand, sort_suit, ParseError,
};
