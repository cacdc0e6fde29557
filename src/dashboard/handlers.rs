//! Dashboard HTTP handler and page rendering.

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    alert::Alert,
    api::ApiClient,
    dashboard::{
        cards::balance_cards_view, controller::DashboardController, table::transactions_table,
    },
    endpoints,
    html::{PAGE_CONTAINER_STYLE, base},
    navigation::Header,
    timezone::get_timezone,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The client for the backend API that holds the transactions.
    pub api_client: ApiClient,
    /// The local timezone as a canonical timezone name, e.g. "America/Sao_Paulo".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the balance cards and the list of transactions.
///
/// Each request loads the data from the backend exactly once. If the load
/// fails, the page is still rendered with blank cards and an empty table,
/// along with an alert, and the status is 502 Bad Gateway.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let timezone = get_timezone(&state.local_timezone)?;

    let mut controller = DashboardController::new();

    match controller.load(&state.api_client, timezone).await {
        Ok(()) => Ok(dashboard_view(&controller, None).into_response()),
        Err(error) => {
            tracing::error!("could not load dashboard data: {error}");
            let page = dashboard_view(&controller, Some(load_failure_alert()));

            Ok((StatusCode::BAD_GATEWAY, page).into_response())
        }
    }
}

fn load_failure_alert() -> Alert {
    Alert::error(
        "Não foi possível carregar as transações",
        "O servidor de dados não respondeu como esperado. Tente novamente mais tarde.",
    )
}

fn dashboard_view(controller: &DashboardController, alert: Option<Alert>) -> Markup {
    let header = Header::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (header)

        main
            id="dashboard-content"
            class=(PAGE_CONTAINER_STYLE)
        {
            (balance_cards_view(controller.balance()))

            @if let Some(alert) = alert {
                div class="w-full mt-8" { (alert.into_markup()) }
            }

            (transactions_table(controller.transactions()))
        }
    );

    base("Dashboard", &content)
}
