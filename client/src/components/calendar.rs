//! Month calendar for picking the agenda day.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use barbershop::schedule::{self, CalendarDay};
use barbershop::types::MonthAvailabilityItem;
use leptos::prelude::*;
use time::{Date, Month};

pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Classes of one day cell.
pub fn day_class(day: CalendarDay, selected: Date, today: Date) -> String {
    let mut class = String::from("calendar__day");
    if day.disabled {
        class.push_str(" calendar__day--disabled");
    }
    if day.date == today {
        class.push_str(" calendar__day--today");
    }
    if day.date == selected {
        class.push_str(" calendar__day--selected");
    }
    class
}

#[component]
pub fn Calendar(
    month: RwSignal<(i32, Month)>,
    selected: RwSignal<Date>,
    #[prop(into)] availability: Signal<Vec<MonthAvailabilityItem>>,
    today: Date,
) -> impl IntoView {
    let title = move || {
        let (year, m) = month.get();
        schedule::month_title(year, m)
    };
    let cells = move || {
        let (year, m) = month.get();
        availability.with(|items| schedule::calendar_month(year, m, items))
    };
    let previous = move |_| month.update(|(y, m)| (*y, *m) = schedule::previous_month(*y, *m));
    let next = move |_| month.update(|(y, m)| (*y, *m) = schedule::next_month(*y, *m));

    view! {
        <div class="calendar">
            <div class="calendar__nav">
                <button type="button" on:click=previous>"‹"</button>
                <span>{title}</span>
                <button type="button" on:click=next>"›"</button>
            </div>
            <div class="calendar__grid">
                {WEEKDAY_LABELS.into_iter().map(|label| view! { <span class="calendar__weekday">{label}</span> }).collect_view()}
                {move || {
                    cells()
                        .into_iter()
                        .map(|cell| match cell {
                            None => view! { <span class="calendar__blank"></span> }.into_any(),
                            Some(day) => {
                                let class = move || day_class(day, selected.get(), today);
                                view! {
                                    <button
                                        type="button"
                                        class=class
                                        disabled=day.disabled
                                        on:click=move |_| selected.set(day.date)
                                    >
                                        {day.date.day()}
                                    </button>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
