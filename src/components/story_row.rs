use leptos::prelude::*;

use crate::models::Story;

#[component]
pub fn StoryRow(story: Story) -> impl IntoView {
    let link = story.link();
    let host = story.host();
    let byline = format!("{} points by {}", story.score, story.by);
    let posted = story.posted_at();

    view! {
        <article class="story-row">
            <h3 class="story-title">
                <a href=link target="_blank" rel="noopener noreferrer">{story.title}</a>
                {host.map(|h| view! { <span class="story-host">" (" {h} ")"</span> })}
            </h3>
            <p class="story-meta">
                <span>{byline}</span>
                {posted.map(|p| view! { <span class="story-time">" | " {p}</span> })}
            </p>
        </article>
    }
}
