//! Result set → cards.

use dealcards_catalog::{Endpoints, GameRecord};
use tracing::debug;

use crate::card::Card;
use crate::surface::Surface;

/// Replaces every card on `surface` with one card per record.
///
/// The previous cards are cleared even when `records` is empty. Order is
/// kept exactly; nothing is sorted, filtered or deduplicated.
pub fn render(surface: &mut dyn Surface, records: &[GameRecord], endpoints: &Endpoints) {
    surface.clear_cards();
    for record in records {
        surface.push_card(Card::from_record(record, endpoints));
    }
    debug!(cards = records.len(), "rendered result set");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Board;

    fn titled(title: &str) -> GameRecord {
        GameRecord {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[test]
    fn one_card_per_record_in_order() {
        let records = vec![titled("Zeta"), titled("Alpha"), titled("Alpha")];
        let mut board = Board::new();
        render(&mut board, &records, &Endpoints::default());

        let titles: Vec<&str> = board.cards().iter().map(|c| c.card.title.as_str()).collect();
        assert_eq!(titles, ["Zeta", "Alpha", "Alpha"]);
    }

    #[test]
    fn replaces_previous_cards() {
        let mut board = Board::new();
        render(&mut board, &[titled("old"), titled("old2")], &Endpoints::default());
        render(&mut board, &[titled("new")], &Endpoints::default());

        assert_eq!(board.cards().len(), 1);
        assert_eq!(board.cards()[0].card.title, "new");
    }

    #[test]
    fn empty_set_clears() {
        let mut board = Board::new();
        render(&mut board, &[titled("old")], &Endpoints::default());
        render(&mut board, &[], &Endpoints::default());
        assert!(board.cards().is_empty());
    }

    #[test]
    fn link_only_when_deal_present() {
        let with_deal = GameRecord {
            cheapest_deal_id: Some("123".into()),
            ..Default::default()
        };
        let mut board = Board::new();
        render(&mut board, &[with_deal, GameRecord::default()], &Endpoints::default());

        let deal = board.cards()[0].card.deal.as_ref().unwrap();
        assert!(deal.url.ends_with("/redirect?dealID=123"));
        assert!(deal.new_context);
        assert!(board.cards()[1].card.deal.is_none());
    }
}
