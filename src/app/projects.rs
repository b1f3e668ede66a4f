use leptos::{prelude::*, server_fn::codec::GetUrl};

use super::lazy::SkeletonView;
#[cfg(feature = "ssr")]
use crate::{config::SiteConfig, github::get_repos};
use crate::{
    content::{self, filter_projects, project_filters, Project, ALL_PROJECTS},
    github::Repo,
    section::{SectionState, Skeleton},
};

#[server(input = GetUrl)]
pub async fn get_repos_server() -> Result<Vec<Repo>, ServerFnError> {
    let config = SiteConfig::from_env().map_err(|e| ServerFnError::new(e))?;
    get_repos(&config.github_username)
        .await
        .map_err(|e| ServerFnError::new(e))
}

#[component]
pub fn Projects() -> impl IntoView {
    let (filter, set_filter) = signal(ALL_PROJECTS.to_string());

    let gallery = content::projects().map(|projects| {
        let buttons = project_filters(projects)
            .into_iter()
            .map(|category| {
                let selected = category.clone();
                let is_active = {
                    let category = category.clone();
                    move || filter.with(|f| *f == category)
                };
                view! {
                    <button
                        class=move || {
                            if is_active() {
                                "px-5 py-2 rounded-full text-sm font-semibold bg-indigo-600 text-white shadow-lg shadow-indigo-500/30"
                            } else {
                                "px-5 py-2 rounded-full text-sm font-semibold bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700"
                            }
                        }
                        on:click=move |_| set_filter.set(selected.clone())
                    >
                        {category}
                    </button>
                }
            })
            .collect_view();
        view! {
            <div class="flex flex-wrap justify-center gap-3 mb-12">{buttons}</div>
            <div class="grid gap-8 md:grid-cols-2">
                {move || {
                    filter
                        .with(|f| filter_projects(projects, f))
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
        }
    });

    view! {
        <section id="projects" class="py-24">
            <div class="max-w-6xl mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-black tracking-tight mb-4">
                        "Featured Projects"
                    </h2>
                    <p class="max-w-2xl mx-auto text-lg text-gray-600 dark:text-gray-400">
                        "A selection of things I've designed, built and shipped."
                    </p>
                </div>
                {gallery}
                <h3 class="text-2xl font-bold mt-20 mb-8 text-center">"Latest on GitHub"</h3>
                <RepoShowcase />
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="group overflow-hidden rounded-3xl bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 hover:shadow-2xl transition-shadow">
            <div class="aspect-video overflow-hidden bg-gray-100 dark:bg-gray-800">
                <img
                    src=project.image.as_str()
                    alt=project.title.as_str()
                    loading="lazy"
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
            </div>
            <div class="p-8">
                <h3 class="text-2xl font-bold">{project.title.as_str()}</h3>
                <p class="text-sm font-semibold text-indigo-600 mb-3">{project.subtitle.as_str()}</p>
                <p class="text-gray-600 dark:text-gray-400 mb-4">{project.description.as_str()}</p>
                <ul class="list-disc list-inside text-sm mb-4 space-y-1">
                    {project
                        .features
                        .iter()
                        .map(|feature| view! { <li>{feature.as_str()}</li> })
                        .collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 text-xs font-semibold rounded-full bg-gray-100 dark:bg-gray-800">
                                    {tag.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 text-sm font-semibold">
                    <a
                        href=project.demo.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-indigo-600 hover:underline"
                    >
                        "Live Demo"
                    </a>
                    <a
                        href=project.code.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:underline"
                    >
                        "Source Code"
                    </a>
                </div>
            </div>
        </article>
    }
}

/// Top starred public repositories, fetched through the server.
#[component]
fn RepoShowcase() -> impl IntoView {
    let showcase = Resource::new(|| (), |_| get_repos_server());

    view! {
        <Suspense fallback=|| view! { <SkeletonView variant=Skeleton::Card /> }>
            {move || match SectionState::from_load(showcase.get()) {
                SectionState::Pending => view! { <SkeletonView variant=Skeleton::Card /> }.into_any(),
                SectionState::Ready(repos) => {
                    view! {
                        <div class="grid gap-6 md:grid-cols-3">
                            {repos.into_iter().map(|repo| view! { <RepoCard repo /> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
                SectionState::Failed(message) => {
                    view! {
                        <div class="text-center text-sm text-gray-500">
                            <p class="mb-4">{message}</p>
                            <button
                                class="px-5 py-2 rounded-full bg-gray-100 dark:bg-gray-800 font-semibold"
                                on:click=move |_| showcase.refetch()
                            >
                                "Try Again"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Suspense>
    }
}

#[component]
fn RepoCard(repo: Repo) -> impl IntoView {
    view! {
        <a
            href=repo.html_url
            target="_blank"
            rel="noopener noreferrer"
            class="block p-6 rounded-2xl border border-gray-200 dark:border-gray-800 hover:border-indigo-600 transition-colors"
        >
            <h4 class="font-bold mb-2">{repo.name}</h4>
            <p class="text-sm text-gray-600 dark:text-gray-400 mb-4 line-clamp-2">
                {repo.description.unwrap_or_else(|| "No description provided.".to_string())}
            </p>
            <div class="flex items-center gap-4 text-xs text-gray-500">
                <span>{format!("★ {}", repo.stargazers_count)}</span>
                {repo.language.map(|language| view! { <span>{language}</span> })}
            </div>
        </a>
    }
}
