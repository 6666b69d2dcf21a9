//! Provider dashboard (`/dashboard`): the selected day's agenda beside a
//! month calendar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two effects keep the page in sync with the API: one refetches month
//! availability when the calendar month changes, the other refetches the
//! selected day's appointments. A response for a month or day that is no
//! longer selected is dropped. A 401 signs the session out inside the auth
//! context, and the route guard then leaves the page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use barbershop::schedule::{self, Agenda, DayHeading};
use barbershop::session::SessionError;
use barbershop::types::{Appointment, MonthAvailabilityItem};
use leptos::prelude::*;
use time::{Date, OffsetDateTime};

use crate::components::calendar::Calendar;
use crate::components::header::Header;
use crate::pages::feedback::failure_toast;
use crate::state::auth::use_auth;
use crate::state::toast::{ToastHandle, use_toasts};
use crate::util::clock;
use crate::util::task::spawn;

pub const SCHEDULE_FAILED: &str = "Could not load schedule";
pub const SCHEDULE_FAILED_HINT: &str = "An error has occurred while loading appointments. Try again later.";
pub const NO_MORNING: &str = "No appointments this morning";
pub const NO_AFTERNOON: &str = "No appointments this afternoon";

/// The upcoming appointment, shown only while looking at today.
pub fn next_appointment(agenda: &Agenda, selected: Date, now: OffsetDateTime) -> Option<&Appointment> {
    if selected == now.date() { agenda.next_after(now) } else { None }
}

/// Heading spans in display order: `Today` (when it applies), day, weekday.
pub fn heading_parts(heading: &DayHeading) -> Vec<String> {
    let mut parts = Vec::with_capacity(3);
    if heading.is_today {
        parts.push("Today".to_owned());
    }
    parts.push(heading.day.clone());
    parts.push(heading.weekday.clone());
    parts
}

fn report(toasts: ToastHandle, err: &SessionError) {
    if matches!(err, SessionError::Expired) {
        // The guard is already on its way to the sign-in page.
        return;
    }
    log::warn!("schedule fetch failed: {err}");
    toasts.push(failure_toast(SCHEDULE_FAILED, SCHEDULE_FAILED_HINT, err));
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();

    let now = clock::now();
    let today = now.date();
    let month = RwSignal::new((today.year(), today.month()));
    let selected = RwSignal::new(today);
    let availability = RwSignal::new(Vec::<MonthAvailabilityItem>::new());
    let appointments = RwSignal::new(Vec::<Appointment>::new());

    let month_auth = auth.clone();
    Effect::new(move |_| {
        let (year, m) = month.get();
        let auth = month_auth.clone();
        spawn(async move {
            match auth.month_availability(schedule::month_query(year, m)).await {
                Ok(items) if month.try_get_untracked() == Some((year, m)) => availability.set(items),
                Ok(_) => log::debug!("dropping stale availability for {year}-{m}"),
                Err(err) => report(toasts, &err),
            }
        });
    });

    let day_auth = auth;
    Effect::new(move |_| {
        let day = selected.get();
        let auth = day_auth.clone();
        spawn(async move {
            match auth.day_appointments(schedule::day_query(day)).await {
                Ok(list) if selected.try_get_untracked() == Some(day) => appointments.set(list),
                Ok(_) => log::debug!("dropping stale appointments for {day}"),
                Err(err) => report(toasts, &err),
            }
        });
    });

    let agenda = move || Agenda::new(appointments.get(), now.offset());
    let heading = move || heading_parts(&schedule::day_heading(selected.get(), today));

    view! {
        <div class="dashboard">
            <Header/>
            <main class="dashboard__content">
                <section class="schedule">
                    <h1>"Scheduled appointments"</h1>
                    <p class="schedule__day">
                        {move || heading().into_iter().map(|part| view! { <span>{part}</span> }).collect_view()}
                    </p>
                    {move || {
                        let agenda = agenda();
                        next_appointment(&agenda, selected.get(), clock::now())
                            .cloned()
                            .map(|next| {
                                view! {
                                    <div class="schedule__next">
                                        <strong>"Up next"</strong>
                                        <AppointmentRow appointment=next/>
                                    </div>
                                }
                            })
                    }}
                    <AgendaSection title="Morning" empty=NO_MORNING items=Signal::derive(move || agenda().morning)/>
                    <AgendaSection
                        title="Afternoon"
                        empty=NO_AFTERNOON
                        items=Signal::derive(move || agenda().afternoon)
                    />
                </section>
                <aside>
                    <Calendar month=month selected=selected availability=availability today=today/>
                </aside>
            </main>
        </div>
    }
}

#[component]
fn AgendaSection(title: &'static str, empty: &'static str, items: Signal<Vec<Appointment>>) -> impl IntoView {
    view! {
        <div class="schedule__section">
            <strong>{title}</strong>
            <Show
                when=move || items.with(|list| !list.is_empty())
                fallback=move || view! { <p class="schedule__empty">{empty}</p> }
            >
                <For
                    each=move || items.get()
                    key=|appointment| appointment.id.clone()
                    children=|appointment| view! { <AppointmentRow appointment=appointment/> }
                />
            </Show>
        </div>
    }
}

#[component]
fn AppointmentRow(appointment: Appointment) -> impl IntoView {
    let hour = schedule::format_hour(appointment.date);
    let client = appointment.user;
    view! {
        <div class="appointment">
            <span class="appointment__hour">{hour}</span>
            <div class="appointment__client">
                {client.avatar_url.map(|src| view! { <img class="avatar" src=src alt=client.name.clone()/> })}
                <strong>{client.name.clone()}</strong>
            </div>
        </div>
    }
}
