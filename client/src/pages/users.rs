//! Users page hosting the registration form.

use leptos::prelude::*;

use crate::components::content_wrapper::{Align, ContentWrapper};
use crate::pages::user_registration::UserRegistrationForm;

#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <ContentWrapper align=Align::Top form=true>
            <div class="paper users-page">
                <h4 class="page-title">"Usuários"</h4>
                <UserRegistrationForm/>
            </div>
        </ContentWrapper>
    }
}
