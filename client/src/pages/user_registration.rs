//! Registration form for a new gate user.
//!
//! The draft lives only in a local signal. Submitting is swallowed: nothing
//! is sent anywhere and the draft is never read back.

#[cfg(test)]
#[path = "user_registration_test.rs"]
mod user_registration_test;

use leptos::prelude::*;

/// Uncommitted form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub identifier: String,
    pub phone: String,
    pub plate: String,
}

/// Inputs in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Identifier,
    Phone,
    Plate,
}

impl RegistrationField {
    pub const ALL: [RegistrationField; 4] = [Self::Name, Self::Identifier, Self::Phone, Self::Plate];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Identifier => "Identificação",
            Self::Phone => "Telefone",
            Self::Plate => "Placa",
        }
    }
}

impl RegistrationDraft {
    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Identifier => &self.identifier,
            RegistrationField::Phone => &self.phone,
            RegistrationField::Plate => &self.plate,
        }
    }

    pub fn set_value(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Identifier => &mut self.identifier,
            RegistrationField::Phone => &mut self.phone,
            RegistrationField::Plate => &mut self.plate,
        };
        *slot = value;
    }
}

/// Four labelled text inputs and a submit button that does nothing.
#[component]
pub fn UserRegistrationForm() -> impl IntoView {
    let draft = RwSignal::new(RegistrationDraft::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("registration submit ignored");
    };

    view! {
        <form class="registration-form" on:submit=on_submit>
            {RegistrationField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <label class="registration-form__label">
                            {field.label()}
                            <input
                                class="registration-form__input"
                                type="text"
                                prop:value=move || draft.get().value(field).to_owned()
                                on:input=move |ev| {
                                    draft.update(|d| d.set_value(field, event_target_value(&ev)));
                                }
                            />
                        </label>
                    }
                })
                .collect_view()}
            <button class="btn btn--primary registration-form__submit" type="submit">
                "Cadastrar"
            </button>
        </form>
    }
}
