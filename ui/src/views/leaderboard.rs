use dioxus::prelude::*;

use crate::core::page::Page;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
struct Standing {
    name: &'static str,
    school: &'static str,
    points: u32,
}

const STANDINGS: &[Standing] = &[
    Standing { name: "Kavya", school: "Govt. School Rampur", points: 1180 },
    Standing { name: "Arjun", school: "Sunrise Academy", points: 1420 },
    Standing { name: "Meera", school: "Govt. School Rampur", points: 990 },
    Standing { name: "Rohan", school: "Valley Public School", points: 1420 },
    Standing { name: "Sana", school: "Sunrise Academy", points: 1305 },
];

/// Highest points first; equal points share a rank (1, 1, 3, ...).
fn ranked(standings: &[Standing]) -> Vec<(usize, Standing)> {
    let mut sorted = standings.to_vec();
    sorted.sort_by(|a, b| b.points.cmp(&a.points).then(a.name.cmp(b.name)));

    let mut out: Vec<(usize, Standing)> = Vec::with_capacity(sorted.len());
    for (idx, standing) in sorted.into_iter().enumerate() {
        let rank = match out.last() {
            Some((prev_rank, prev)) if prev.points == standing.points => *prev_rank,
            _ => idx + 1,
        };
        out.push((rank, standing));
    }
    out
}

fn row_class(rank: usize) -> &'static str {
    if rank <= 3 {
        "leaderboard__row leaderboard__row--podium"
    } else {
        "leaderboard__row"
    }
}

#[component]
pub fn Leaderboard(on_navigate: EventHandler<Page>) -> Element {
    let rows = ranked(STANDINGS);

    rsx! {
        section { class: "page page-leaderboard",
            h1 { {t!("leaderboard-title")} }
            p { {t!("leaderboard-intro")} }

            table { class: "leaderboard",
                thead {
                    tr {
                        th { {t!("leaderboard-rank")} }
                        th { {t!("leaderboard-student")} }
                        th { {t!("leaderboard-points")} }
                    }
                }
                tbody {
                    for (rank, row) in rows {
                        tr { key: "{row.name}",
                            class: row_class(rank),
                            td { "#{rank}" }
                            td {
                                span { class: "leaderboard__name", "{row.name}" }
                                span { class: "leaderboard__school", "{row.school}" }
                            }
                            td { "{row.points}" }
                        }
                    }
                }
            }

            button {
                r#type: "button",
                class: "button button--accent",
                onclick: move |_| on_navigate.call(Page::Arena),
                {t!("leaderboard-join-arena")}
            }
        }
    }
}
