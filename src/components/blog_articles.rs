//! Blog Articles Component

use leptos::prelude::*;

use crate::content::{Article, ARTICLES};

#[component]
pub fn BlogArticles() -> impl IntoView {
    let Some((featured, rest)) = ARTICLES.split_first() else {
        return ().into_any();
    };

    view! {
        <section class="articles">
            <div class="section-heading split">
                <h2><span class="eyebrow-icon">"✍"</span>"Latest Articles"</h2>
                <a href="/blogs/news">"View All"</a>
            </div>
            <div class="articles-grid">
                <article class="article-featured">
                    <img src=featured.image alt=featured.title />
                    <div class="article-overlay">
                        <span class="article-category">{featured.category}</span>
                        <h3>{featured.title}</h3>
                        <ArticleByline article=featured />
                    </div>
                </article>
                <div class="articles-secondary">
                    {rest.iter().map(|article| view! {
                        <article class="article-row">
                            <img src=article.image alt=article.title />
                            <div class="article-text">
                                <span class="article-category">{article.category}</span>
                                <h3>{article.title}</h3>
                                <ArticleByline article=article />
                            </div>
                        </article>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ArticleByline(article: &'static Article) -> impl IntoView {
    view! {
        <div class="article-byline">
            <span>{format!("By {}", article.author)}</span>
            <span>"•"</span>
            <span>{article.date}</span>
        </div>
    }
}
