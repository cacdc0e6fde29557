//! The three cards summarising income, outcome and the running total.

use maud::{Markup, html};

use crate::dashboard::view_model::BalanceView;

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 rounded-lg p-6 shadow-md \
    text-gray-900 dark:text-white";
const TOTAL_CARD_STYLE: &str = "bg-orange-400 rounded-lg p-6 shadow-md text-white";

/// Which balance figure a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardKind {
    Income,
    Outcome,
    Total,
}

impl CardKind {
    fn label(self) -> &'static str {
        match self {
            CardKind::Income => "Entradas",
            CardKind::Outcome => "Saídas",
            CardKind::Total => "Total",
        }
    }

    fn icon(self) -> (&'static str, &'static str) {
        match self {
            CardKind::Income => ("/static/income.svg", "Income"),
            CardKind::Outcome => ("/static/outcome.svg", "Outcome"),
            CardKind::Total => ("/static/total.svg", "Total"),
        }
    }

    /// The hook automated UI checks use to find the card's value.
    fn test_id(self) -> &'static str {
        match self {
            CardKind::Income => "balance-income",
            CardKind::Outcome => "balance-outcome",
            CardKind::Total => "balance-total",
        }
    }

    fn value(self, balance: &BalanceView) -> &str {
        match self {
            CardKind::Income => &balance.income,
            CardKind::Outcome => &balance.outcome,
            CardKind::Total => &balance.total,
        }
    }
}

/// Renders the income, outcome and total cards.
///
/// The cards are always shown. Their values are left blank while `balance` is `None`.
pub(super) fn balance_cards_view(balance: Option<&BalanceView>) -> Markup {
    html! {
        section
            id="balance-cards"
            class="grid grid-cols-1 md:grid-cols-3 gap-8 w-full -mt-36"
        {
            @for kind in [CardKind::Income, CardKind::Outcome, CardKind::Total] {
                (balance_card(kind, balance))
            }
        }
    }
}

fn balance_card(kind: CardKind, balance: Option<&BalanceView>) -> Markup {
    let (icon_src, icon_alt) = kind.icon();
    let style = if kind == CardKind::Total {
        TOTAL_CARD_STYLE
    } else {
        CARD_STYLE
    };

    html! {
        div class=(style)
        {
            header class="flex items-center justify-between"
            {
                p class="text-base" { (kind.label()) }
                img src=(icon_src) alt=(icon_alt);
            }

            h1 data-testid=(kind.test_id()) class="mt-4 text-4xl font-normal leading-tight"
            {
                @if let Some(balance) = balance {
                    (kind.value(balance))
                }
            }
        }
    }
}
