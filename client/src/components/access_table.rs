//! Table of recent vehicle entries and exits.

use leptos::prelude::*;

use crate::state::dashboard::AccessRecord;

const HEADERS: [&str; 4] = ["Usuários", "Placa", "Horário de Entrada", "Horário de Saída"];

#[component]
pub fn AccessTable(records: Vec<AccessRecord>) -> impl IntoView {
    view! {
        <div class="paper access-table">
            <table class="access-table__table">
                <thead>
                    <tr>
                        <th class="access-table__user-col">{HEADERS[0]}</th>
                        {HEADERS[1..]
                            .iter()
                            .map(|h| view! { <th class="access-table__num">{*h}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {records
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <th scope="row">{row.user}</th>
                                    <td class="access-table__num">{row.plate}</td>
                                    <td class="access-table__num">{row.entered_at}</td>
                                    <td class="access-table__num">{row.left_at}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
