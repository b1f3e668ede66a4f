use std::time::Duration;

use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content;

const ROTATE_EVERY: Duration = Duration::from_secs(5);
const BUILD_TIME: &str = env!("BUILD_TIME");

const ACHIEVEMENTS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Developed Responsive Web Apps",
        "Using React and Node.js, enhancing user experience and improving application performance.",
    ),
    (
        "02",
        "Collaborated on Projects",
        "With cross-functional teams to define requirements, ensuring timely delivery of high-quality software.",
    ),
    (
        "03",
        "Implemented RESTful APIs",
        "For seamless integration between front-end and back-end systems, optimizing data flow and efficiency.",
    ),
    (
        "04",
        "Conducted Code Reviews",
        "To ensure adherence to best practices, improving overall code quality and maintainability.",
    ),
];

const EDUCATION: [(&str, &str, &str); 3] = [
    (
        "Narsimha Reddy Engineering College",
        "Bachelor of Technology in Computer Science and Engineering",
        "Hyderabad, India · Expected August 2027",
    ),
    (
        "S R Junior College",
        "Intermediate Education (1st & 2nd Year)",
        "Telangana, India",
    ),
    (
        "Sharada Vidya Bhavan High School",
        "Secondary School Education",
        "Telangana, India",
    ),
];

const SKILLS: [(&str, u8); 10] = [
    ("JavaScript", 90),
    ("React", 85),
    ("Node.js", 80),
    ("Angular.js", 75),
    ("jQuery", 85),
    ("Bootstrap", 90),
    ("HTML5", 95),
    ("CSS3", 90),
    ("Git", 85),
    ("AWS", 70),
];

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-4xl md:text-5xl font-black tracking-tight mb-4">{title}</h2>
            <p class="max-w-2xl mx-auto text-lg text-gray-600 dark:text-gray-400">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative min-h-screen flex items-center pt-16 overflow-hidden">
            <div class="absolute inset-0 -z-10 bg-gradient-to-br from-indigo-50 via-white to-purple-50 dark:from-gray-950 dark:via-gray-950 dark:to-indigo-950/40"></div>
            <div class="max-w-6xl mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <span class="inline-flex items-center gap-2 px-4 py-1 mb-6 rounded-full text-sm font-semibold bg-green-100 text-green-700 dark:bg-green-900/30 dark:text-green-400">
                        <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                        "Available for New Projects"
                    </span>
                    <p class="text-xl font-medium text-gray-600 dark:text-gray-400 mb-2">
                        "Hello, I'm Valluri Rahul"
                    </p>
                    <h1 class="text-5xl md:text-7xl font-black tracking-tight mb-6">
                        "Full Stack "
                        <span class="bg-gradient-to-r from-indigo-600 to-purple-600 bg-clip-text text-transparent">
                            "Developer"
                        </span>
                    </h1>
                    <p class="text-lg text-gray-600 dark:text-gray-400 mb-8">
                        "Crafting exceptional digital experiences. Specialized in React, Node.js, and Cloud."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="/resume.pdf"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-8 py-3 rounded-full bg-indigo-600 text-white font-semibold hover:bg-indigo-700 transition-colors"
                        >
                            "Download CV"
                        </a>
                        <a
                            href="#projects"
                            class="px-8 py-3 rounded-full border border-gray-300 dark:border-gray-700 font-semibold hover:border-indigo-600 transition-colors"
                        >
                            "View Projects"
                        </a>
                    </div>
                </div>
                <div class="hidden lg:flex justify-center">
                    <div class="relative w-80 h-80">
                        <div class="absolute inset-0 rounded-full border-2 border-dashed border-indigo-300 dark:border-indigo-800 animate-spin [animation-duration:30s]"></div>
                        <div class="absolute inset-12 rounded-full border-2 border-dashed border-purple-300 dark:border-purple-800 animate-spin [animation-duration:40s]"></div>
                        <div class="absolute inset-24 rounded-full bg-gradient-to-br from-indigo-600 to-purple-600 shadow-2xl shadow-indigo-500/40"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="About Me"
                    subtitle="A little about who I am, where I studied, and what I build with."
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <img
                            src="/profile.jpg"
                            alt="Valluri Rahul"
                            class="w-full max-w-sm mx-auto rounded-3xl shadow-xl"
                        />
                        <div class="grid sm:grid-cols-2 gap-4">
                            {ACHIEVEMENTS
                                .iter()
                                .map(|(id, title, desc)| {
                                    view! {
                                        <div class="p-4 rounded-2xl bg-gray-50 dark:bg-gray-900">
                                            <span class="text-sm font-black text-indigo-600">{*id}</span>
                                            <h3 class="font-bold mt-1">{*title}</h3>
                                            <p class="text-sm text-gray-600 dark:text-gray-400">{*desc}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="space-y-8">
                        <p class="text-lg leading-relaxed text-gray-700 dark:text-gray-300">
                            "Results-driven Computer Science student with hands-on experience in full-stack development and cloud technologies. I build responsive web applications and care about clean, maintainable code."
                        </p>
                        <div>
                            <h3 class="text-2xl font-bold mb-4">"Education"</h3>
                            <ul class="space-y-4">
                                {EDUCATION
                                    .iter()
                                    .map(|(school, degree, place)| {
                                        view! {
                                            <li class="pl-4 border-l-4 border-indigo-600">
                                                <p class="font-bold">{*school}</p>
                                                <p class="text-sm">{*degree}</p>
                                                <p class="text-sm text-gray-500">{*place}</p>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h3 class="text-2xl font-bold mb-4">"Technical Skills"</h3>
                            <div class="space-y-3">
                                {SKILLS
                                    .iter()
                                    .map(|(name, level)| {
                                        view! {
                                            <div>
                                                <div class="flex justify-between text-sm mb-1">
                                                    <span class="font-medium">{*name}</span>
                                                    <span class="text-gray-500">{format!("{level}%")}</span>
                                                </div>
                                                <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-800">
                                                    <div
                                                        class="h-full rounded-full bg-gradient-to-r from-indigo-600 to-purple-600"
                                                        style=format!("width: {level}%")
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let services = content::services().map(|services| {
        services
            .iter()
            .map(|service| {
                view! {
                    <div class="p-8 rounded-3xl bg-white dark:bg-gray-900 border border-gray-200 dark:border-gray-800 hover:shadow-xl transition-shadow">
                        <h3 class="text-xl font-bold mb-3">{service.title.as_str()}</h3>
                        <p class="text-gray-600 dark:text-gray-400 mb-6">
                            {service.description.as_str()}
                        </p>
                        <ul class="flex flex-wrap gap-2">
                            {service
                                .tech
                                .iter()
                                .map(|tech| {
                                    view! {
                                        <li class="px-3 py-1 text-xs font-semibold rounded-full bg-indigo-50 text-indigo-700 dark:bg-indigo-950 dark:text-indigo-300">
                                            {tech.as_str()}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                }
            })
            .collect_view()
    });
    view! {
        <section id="services" class="py-24 bg-gray-50 dark:bg-gray-900/40">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="Services"
                    subtitle="End-to-end help, from the first wireframe to production."
                />
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{services}</div>
            </div>
        </section>
    }
}

#[component]
pub fn Certifications() -> impl IntoView {
    let certifications = content::certifications().map(|certifications| {
        certifications
            .iter()
            .map(|cert| {
                view! {
                    <a
                        href=cert.link.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="block p-6 rounded-2xl border border-gray-200 dark:border-gray-800 hover:border-indigo-600 transition-colors"
                    >
                        <p class="text-sm font-semibold text-indigo-600">{cert.date.as_str()}</p>
                        <h3 class="text-lg font-bold mt-1">{cert.title.as_str()}</h3>
                        <p class="text-sm text-gray-600 dark:text-gray-400">{cert.issuer.as_str()}</p>
                    </a>
                }
            })
            .collect_view()
    });
    view! {
        <section id="certifications" class="py-24">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="Certifications"
                    subtitle="Courses and credentials I've completed along the way."
                />
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{certifications}</div>
            </div>
        </section>
    }
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let (index, set_index) = signal(0_usize);
    let testimonials = content::testimonials();
    let count = testimonials.as_ref().map(|t| t.len()).unwrap_or_default();

    Effect::new(move |_| {
        if count < 2 {
            return;
        }
        match set_interval_with_handle(
            move || set_index.update(|i| *i = next_slide(*i, count)),
            ROTATE_EVERY,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("couldn't start testimonial rotation: {e:?}"),
        }
    });

    let carousel = testimonials.map(|items| {
        view! {
            <div class="max-w-3xl mx-auto text-center">
                {move || {
                    items
                        .get(index.get())
                        .map(|t| {
                            view! {
                                <blockquote class="p-10 rounded-3xl bg-white dark:bg-gray-900 shadow-xl">
                                    <p class="text-2xl text-yellow-400 mb-4">
                                        {"★".repeat(usize::from(t.rating))}
                                    </p>
                                    <p class="text-xl italic leading-relaxed mb-6">
                                        {format!("\u{201c}{}\u{201d}", t.quote)}
                                    </p>
                                    <footer>
                                        <p class="font-bold">{t.name.as_str()}</p>
                                        <p class="text-sm text-gray-500">{t.role.as_str()}</p>
                                    </footer>
                                </blockquote>
                            }
                        })
                }}
                <div class="flex justify-center gap-2 mt-6">
                    {(0..items.len())
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if index.get() == i {
                                            "w-3 h-3 rounded-full transition-colors bg-indigo-600"
                                        } else {
                                            "w-3 h-3 rounded-full transition-colors bg-gray-300 dark:bg-gray-700"
                                        }
                                    }
                                    aria-label=format!("Show testimonial {}", i + 1)
                                    on:click=move |_| set_index.set(i)
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
    });

    view! {
        <section id="testimonials" class="py-24 bg-gray-50 dark:bg-gray-900/40">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading
                    title="Testimonials"
                    subtitle="What people I've worked with have to say."
                />
                {carousel}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();
    // server and browser bundles are stamped separately, so only the browser shows it
    let (built, set_built) = signal(None::<String>);
    Effect::new(move |_| set_built.set(build_label(BUILD_TIME)));
    view! {
        <footer class="py-12 border-t border-gray-200 dark:border-gray-800">
            <div class="max-w-6xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-6">
                <div>
                    <p class="text-xl font-black">"Rahul" <span class="text-indigo-600">"."</span></p>
                    <p class="text-sm text-gray-500">"Building digital experiences that matter."</p>
                </div>
                <div class="flex gap-6 text-sm font-medium">
                    <a href="https://github.com/bunnyvalluri" target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                    <a href="https://www.linkedin.com/in/syntaxrahul/" target="_blank" rel="noopener noreferrer">
                        "LinkedIn"
                    </a>
                    <a
                        href="https://www.instagram.com/syntax_bunny"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Instagram"
                    </a>
                </div>
                <div class="text-sm text-gray-500 text-center md:text-right">
                    <p>{format!("© {year} Valluri Rahul. All rights reserved.")}</p>
                    <p class="text-xs">{move || built.get().map(|at| format!("Built {at}"))}</p>
                </div>
            </div>
        </footer>
    }
}

fn next_slide(current: usize, count: usize) -> usize {
    if count == 0 {
        0
    } else {
        (current + 1) % count
    }
}

fn build_label(stamp: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(stamp)
        .ok()
        .map(|at| at.format("%b %e, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_slide_wraps() {
        assert_eq!(next_slide(0, 3), 1);
        assert_eq!(next_slide(2, 3), 0);
        assert_eq!(next_slide(5, 0), 0);
    }

    #[test]
    fn test_build_label() {
        assert_eq!(
            build_label("2025-03-09T17:04:00.123+00:00").as_deref(),
            Some("Mar  9, 2025")
        );
        assert_eq!(build_label("yesterday"), None);
        assert!(build_label(BUILD_TIME).is_some());
    }
}
