//! The table listing every transaction.

use maud::{Markup, html};

use crate::{
    api::TransactionType,
    dashboard::view_model::TransactionView,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
};

const INCOME_STYLE: &str = "income text-green-600 dark:text-green-400";
const OUTCOME_STYLE: &str = "outcome text-red-600 dark:text-red-400";

/// Renders one row per transaction, in the order given.
pub(super) fn transactions_table(transactions: &[TransactionView]) -> Markup {
    html! {
        section class="w-full mt-16 overflow-x-auto"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Título" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Preço" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                    }
                }

                tbody
                {
                    @for view in transactions {
                        (transaction_row(view))
                    }
                }
            }
        }
    }
}

fn transaction_row(view: &TransactionView) -> Markup {
    let transaction = &view.transaction;
    let value_style = match transaction.type_ {
        TransactionType::Income => INCOME_STYLE,
        TransactionType::Outcome => OUTCOME_STYLE,
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id)
        {
            td class={"title " (TABLE_CELL_STYLE) " text-gray-900 dark:text-white"}
            {
                (transaction.title)
            }
            td class={(value_style) " " (TABLE_CELL_STYLE)} { (view.formatted_value) }
            td class=(TABLE_CELL_STYLE)
            {
                @if let Some(category) = &transaction.category {
                    (category.title)
                }
            }
            td class=(TABLE_CELL_STYLE) { (view.formatted_date) }
        }
    }
}
