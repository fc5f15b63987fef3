use gloo_timers::callback::Interval;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use crate::components::consultation::ConsultationForm;
use crate::lead::controller::VisaType;

const CONTACT_EMAIL: &str = "visaservice.eurolink@gmail.com";
const PHONE_PRIMARY: &str = "9707145321";
const PHONE_SECONDARY: &str = "1-4521522";
const WHATSAPP_URL: &str = "https://wa.me/9779707145321";
const MAPS_URL: &str = "https://maps.app.goo.gl/AZYgPcoEbMvSHXmM7";
const MAPS_EMBED_URL: &str =
    "https://maps.google.com/maps?q=EuroLink%20Visa%20Service&t=&z=16&ie=UTF8&iwloc=&output=embed";

struct CountryCard {
    name: &'static str,
    copy: &'static str,
    accent: &'static str,
}

const COUNTRY_CARDS: &[CountryCard] = &[
    CountryCard {
        name: "United Kingdom",
        copy: "Student visa (CAS), dependents, skilled routes, and visitor visas with UKVI-ready files.",
        accent: "linear-gradient(135deg, #0c2f5c, #c59b3a)",
    },
    CountryCard {
        name: "Australia",
        copy: "Subclass 500, 485, GS statements, and COE readiness with precise documentation.",
        accent: "linear-gradient(135deg, #fcd34d, #f97316)",
    },
    CountryCard {
        name: "United States",
        copy: "F-1 with I-20 prep, SEVIS, DS-160, and interview coaching for confident approvals.",
        accent: "linear-gradient(135deg, #60a5fa, #6366f1)",
    },
    CountryCard {
        name: "Canada",
        copy: "SDS/non-SDS files, SOP polish, GIC guidance, and study permit timelines.",
        accent: "linear-gradient(135deg, #f87171, #f43f5e)",
    },
    CountryCard {
        name: "Italy · Malta · Cyprus",
        copy: "Europe study with financial proof, insurance, appointments, and interview prep.",
        accent: "linear-gradient(135deg, #34d399, #5eead4)",
    },
];

struct ServiceCard {
    visa: VisaType,
    icon: &'static str,
    desc: &'static str,
}

const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        visa: VisaType::Student,
        icon: "🎓",
        desc: "Course selection, SOP drafting, CAS/COE readiness, and embassy interview simulation.",
    },
    ServiceCard {
        visa: VisaType::Work,
        icon: "💼",
        desc: "Skilled migration mapping, employer tie-ups, CV refinement, and compliance-first dossiers.",
    },
    ServiceCard {
        visa: VisaType::Tourist,
        icon: "🌍",
        desc: "Purpose-driven cover letters, financial proof curation, and smooth appointment handling.",
    },
    ServiceCard {
        visa: VisaType::Seasonal,
        icon: "🌾",
        desc: "Seasonal routes for agri, hospitality, logistics — compliant documentation and employer coordination.",
    },
];

struct Pillar {
    title: &'static str,
    desc: &'static str,
}

const PILLARS: &[Pillar] = &[
    Pillar {
        title: "98% approval guidance",
        desc: "Dual-review checklists, airtight documents, and risk flags resolved before filing.",
    },
    Pillar {
        title: "Transparent timelines",
        desc: "Milestone dashboards and proactive updates across every stage.",
    },
    Pillar {
        title: "Interview mastery",
        desc: "Mock interviews, embassy-style Q&A, and body-language coaching.",
    },
    Pillar {
        title: "Trusted partners",
        desc: "Universities, employers, and embassies across UK, Australia, Europe, USA.",
    },
    Pillar {
        title: "Financial proof clarity",
        desc: "GIC, blocked accounts, IHS/SEVIS, and sponsorship evidence that passes scrutiny.",
    },
    Pillar {
        title: "Post-approval care",
        desc: "Pre-departure, housing tips, work rules, and arrival check-ins.",
    },
];

struct Testimonial {
    name: &'static str,
    quote: &'static str,
    tag: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Aarav, London",
        quote: "EuroLink rebuilt my SOP and financials — CAS approved in one shot. The mock interviews felt like the real thing.",
        tag: "UK · Student Visa",
    },
    Testimonial {
        name: "Prerana, Sydney",
        quote: "They handled my GTE, COE, and timelines with military precision. Felt premium and personal.",
        tag: "Australia · Student Visa",
    },
    Testimonial {
        name: "Sanjay, Munich",
        quote: "From job mapping to EU documentation, they kept every requirement crystal clear. Zero surprises.",
        tag: "Europe · Work Visa",
    },
];

struct Timeline {
    title: &'static str,
    badge: &'static str,
    steps: &'static [&'static str],
    notes: &'static [&'static str],
}

const UK_STUDENT: Timeline = Timeline {
    title: "UK Student Visa",
    badge: "CAS · UKVI",
    steps: &[
        "Profile Assessment & Course Selection — academics, IELTS, finances, goals, best-fit universities.",
        "University Application — to UKVI-approved institutions for your intake.",
        "Offer Letter & CAS — deposit paid, CAS issued.",
        "Visa Application — online form, IHS, visa fee, biometrics.",
        "Visa Decision & Pre-Departure — travel, accommodation, part-time work guidance.",
    ],
    notes: &["✔ Work up to 20 hours/week", "✔ Graduate Route available"],
};

const AUS_STUDENT: Timeline = Timeline {
    title: "Australia Student Visa",
    badge: "GS · COE",
    steps: &[
        "Course & Institution Selection — CRICOS-registered options by profile and budget.",
        "Offer Letter & COE — acceptance, tuition deposit, COE issued.",
        "GS Requirement & Visa Filing — GS statement, financials, lodge application.",
        "Medical & Biometrics — health checks and biometrics submitted.",
        "Visa Grant & Pre-Departure — housing and travel planning.",
    ],
    notes: &["✔ Work up to 48 hours/fortnight", "✔ Strong post-study work options"],
};

const USA_STUDENT: Timeline = Timeline {
    title: "USA Student Visa",
    badge: "SEVIS · I-20",
    steps: &[
        "University & Course Selection — SEVP-approved fit to academics/finances.",
        "Offer Letter & I-20 — deposit paid, I-20 received.",
        "SEVIS & Visa Application — SEVIS fee, DS-160, appointment.",
        "Visa Interview Prep — mocks and document coaching.",
        "Visa Approval & Departure — travel planning and orientation.",
    ],
    notes: &["✔ On-campus work", "✔ OPT & CPT pathways"],
};

const EUROPE_STUDENT: Timeline = Timeline {
    title: "Europe Student Visa",
    badge: "Italy · Malta · Cyprus",
    steps: &[
        "Country & Program Selection — fees, language, jobs, ROI.",
        "University Admission — public/private; English programs available.",
        "Financial Proof & Appointment — blocked account/insurance, embassy slot.",
        "Visa Application — file prep, forms, biometrics.",
        "Visa Approval & Travel — pre-departure and post-arrival guidance.",
    ],
    notes: &[
        "✔ Low/no tuition options",
        "✔ Part-time work",
        "✔ Pathway to work permit & PR",
    ],
};

const CANADA_STUDENT: Timeline = Timeline {
    title: "Canada Student Visa",
    badge: "SDS · GIC",
    steps: &[
        "Program & DLI Selection — SDS/non-SDS strategy.",
        "Offer Letter & Fees — deposit and LOA readiness.",
        "GIC & Financials — GIC setup and proof of funds.",
        "Study Permit Filing — biometrics, forms, and submission.",
        "Decision & Pre-Departure — housing, travel, work rules.",
    ],
    notes: &["✔ Co-op and PGWP pathways"],
};

const WORK_TIMELINE: Timeline = Timeline {
    title: "Europe Work Visa Process",
    badge: "Europe Focus",
    steps: &[
        "Eligibility Assessment & Country Selection — skills, age, language, best-fit country.",
        "Job Matching & Employer Search — verified roles in manufacturing, hospitality, construction, caregiving, logistics, agriculture.",
        "Job Offer / Employment Contract — secured for visa filing.",
        "Work Permit Approval — employer applies; we follow up for compliance.",
        "Document Preparation — passport, contract, permit, education, police, medical, insurance, financials.",
        "Visa Application & Embassy Appointment — online form, slot, fee, biometrics.",
        "Interview Prep (if required) — briefings and sample Q&A.",
        "Visa Decision — stamping and next steps.",
        "Pre-Departure Orientation — travel, accommodation, laws, salary/tax, rights.",
        "Departure & Post-Arrival Support — airport guidance, reporting, residence permit, registration.",
    ],
    notes: &["Popular: Germany, Romania, Poland, Croatia, Malta, Portugal, Hungary, Lithuania & more"],
};

const VISIT_TIMELINE: Timeline = Timeline {
    title: "Visit / Tourist Visa Process",
    badge: "Travel · Family · Business",
    steps: &[
        "Free Eligibility Check — purpose, finances, travel history.",
        "Visa Type & Country Selection — tourist, family, business.",
        "Document Preparation — passport, bank, itinerary, invitation, insurance.",
        "Application & Appointment — online form, fee, VFS/embassy slot.",
        "Biometrics & Interview — fingerprints, photo, interview prep (UK/USA).",
        "Visa Decision & Pre-Departure — tracking, approval support, travel guidance.",
    ],
    notes: &[],
};

const SEASONAL_TIMELINE: Timeline = Timeline {
    title: "Seasonal Work Visa Process",
    badge: "Agri · Hospitality · Food Processing",
    steps: &[
        "Eligibility Check — age, experience, health, availability.",
        "Country & Job Selection — approved seasonal employers.",
        "Job Offer / Contract — legal offer secured.",
        "Document Preparation — passport, medical, police, insurance, permit papers.",
        "Visa Application & Biometrics — filing, fee, appointment, fingerprints.",
        "Visa Decision & Departure — approval, briefing, travel guidance.",
    ],
    notes: &[],
};

#[derive(Clone, Copy, PartialEq)]
enum Category {
    Student,
    Work,
    Visit,
    Seasonal,
}

impl Category {
    const ALL: [Category; 4] = [
        Category::Student,
        Category::Work,
        Category::Visit,
        Category::Seasonal,
    ];

    fn label(self) -> &'static str {
        match self {
            Category::Student => "Student Visas",
            Category::Work => "Work Visas",
            Category::Visit => "Visit / Tourist",
            Category::Seasonal => "Seasonal Work",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum StudentRoute {
    Uk,
    Aus,
    Usa,
    Europe,
    Canada,
}

impl StudentRoute {
    const ALL: [StudentRoute; 5] = [
        StudentRoute::Uk,
        StudentRoute::Aus,
        StudentRoute::Usa,
        StudentRoute::Europe,
        StudentRoute::Canada,
    ];

    fn label(self) -> &'static str {
        match self {
            StudentRoute::Uk => "UK",
            StudentRoute::Aus => "Australia",
            StudentRoute::Usa => "USA",
            StudentRoute::Europe => "Europe",
            StudentRoute::Canada => "Canada",
        }
    }

    fn timeline(self) -> &'static Timeline {
        match self {
            StudentRoute::Uk => &UK_STUDENT,
            StudentRoute::Aus => &AUS_STUDENT,
            StudentRoute::Usa => &USA_STUDENT,
            StudentRoute::Europe => &EUROPE_STUDENT,
            StudentRoute::Canada => &CANADA_STUDENT,
        }
    }
}

#[derive(Properties, PartialEq)]
struct SectionHeadingProps {
    #[prop_or_default]
    eyebrow: Option<AttrValue>,
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            {
                if let Some(eyebrow) = &props.eyebrow {
                    html! { <span class="eyebrow">{eyebrow.clone()}</span> }
                } else {
                    html! {}
                }
            }
            <h2>{props.title.clone()}</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn mobile_viewport() -> bool {
    window()
        .and_then(|w| w.match_media("(max-width: 767px)").ok())
        .flatten()
        .map(|media| media.matches())
        .unwrap_or(false)
}

/// Advances a snap carousel one card at a time while the viewport is phone
/// sized. The step is measured per tick (card width plus the track's column
/// gap) so it survives orientation changes without a resize listener.
fn auto_carousel(track: NodeRef, delay_ms: u32) -> Interval {
    let mut index = 0usize;
    Interval::new(delay_ms, move || {
        if !mobile_viewport() {
            return;
        }
        let Some(container) = track.cast::<Element>() else {
            return;
        };
        let children = container.children();
        let count = children.length() as usize;
        let Some(first) = children.item(0) else {
            return;
        };
        let gap = window()
            .and_then(|w| w.get_computed_style(&container).ok())
            .flatten()
            .and_then(|style| style.get_property_value("column-gap").ok())
            .and_then(|value| value.trim_end_matches("px").parse::<f64>().ok())
            .unwrap_or(0.0);
        let step = first.get_bounding_client_rect().width() + gap;
        if step <= 0.0 {
            return;
        }
        index = (index + 1) % count;
        let options = ScrollToOptions::new();
        options.set_left(index as f64 * step);
        options.set_behavior(ScrollBehavior::Smooth);
        container.scroll_to_with_scroll_to_options(&options);
    })
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="container">
                <div class="hero-topbar">
                    <div class="brand">
                        <div class="brand-mark">{"EL"}</div>
                        <div>
                            <p class="eyebrow">{"EuroLink Visa Service"}</p>
                            <p class="brand-line">{"Visa consultancy · Nepal"}</p>
                        </div>
                    </div>
                    <div class="contact-chips">
                        <a class="chip-link" href={format!("tel:+977-{}", PHONE_PRIMARY)}>{PHONE_PRIMARY}</a>
                        <a class="chip-link" href={format!("tel:{}", PHONE_SECONDARY)}>{PHONE_SECONDARY}</a>
                        <a class="chip-link" href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                        <a class="chip-link" href={WHATSAPP_URL} target="_blank" rel="noreferrer">{"WhatsApp"}</a>
                    </div>
                </div>
                <div class="hero-layout">
                    <div class="hero-copy">
                        <span class="hero-badge">{"Premium visa partners"}</span>
                        <h1>
                            {"Visa made simple for Nepal"}
                            <span class="text-gradient">{"UK · Australia · Europe"}</span>
                        </h1>
                        <p class="hero-subtitle">
                            {"EuroLink Visa Service crafts premium pathways for students, professionals, and travelers with precise documentation, trusted advisors, and cinematic support."}
                        </p>
                        <div class="hero-ctas">
                            <a class="btn-primary" href="#consultation">{"Free Consultation →"}</a>
                            <a class="btn-ghost" href={format!("mailto:{}", CONTACT_EMAIL)}>{"Email Us"}</a>
                            <a class="btn-ghost" href={format!("tel:+977-{}", PHONE_PRIMARY)}>{format!("Call {}", PHONE_PRIMARY)}</a>
                        </div>
                        <div class="stat-grid">
                            <div class="stat-card">
                                <div class="stat-value">{"98%"}</div>
                                <div class="stat-label">{"Success Rate"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{"24/7"}</div>
                                <div class="stat-label">{"Live Support"}</div>
                            </div>
                        </div>
                    </div>
                    <div class="advisory-card">
                        <div class="advisory-head">
                            <div>
                                <p class="eyebrow">{"Premium Advisory"}</p>
                                <h3>{"EuroLink Visa Service"}</h3>
                            </div>
                            <span class="live-pill">{"Live Support"}</span>
                        </div>
                        {
                            [
                                ("Student Visa — UK & Australia", "Priority slots"),
                                ("Work Visa — Europe / Schengen", "Skilled migration focus"),
                                ("Tourist Visa — Global", "Fast-track assistance"),
                                ("Seasonal Work Visa", "Agri · Hospitality · Logistics"),
                            ]
                            .iter()
                            .map(|&(track, status)| html! {
                                <div class="track-row" key={track}>
                                    <div class="track-head">
                                        <p>{track}</p>
                                        <span>{status}</span>
                                    </div>
                                    <div class="track-bar"><div class="track-fill"></div></div>
                                </div>
                            })
                            .collect::<Html>()
                        }
                        <p class="advisory-foot">
                            {"Accredited partners with universities and employers across the UK, Australia, and Europe."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Countries)]
fn countries() -> Html {
    let track = use_node_ref();
    {
        let track = track.clone();
        use_effect_with_deps(
            move |_| {
                let interval = auto_carousel(track, 2400);
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section id="countries" class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Destinations"
                    title="Trusted pathways to the UK, Australia, and Europe"
                    subtitle="Tailored counseling, documentation polish, and transparent timelines for every route."
                />
                <div class="card-grid cols-3" ref={track}>
                    {
                        COUNTRY_CARDS.iter().map(|card| html! {
                            <div class="card" key={card.name}>
                                <div class="card-accent" style={format!("background: {};", card.accent)}></div>
                                <span class="tag">{"Premium"}</span>
                                <h3>{card.name}</h3>
                                <p>{card.copy}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServicesProps {
    pub on_book: Callback<VisaType>,
}

#[function_component(Services)]
fn services(props: &ServicesProps) -> Html {
    let track = use_node_ref();
    {
        let track = track.clone();
        use_effect_with_deps(
            move |_| {
                let interval = auto_carousel(track, 2600);
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section id="services" class="section alt">
            <div class="container">
                <SectionHeading
                    eyebrow="Services"
                    title="Student, Work, and Tourist visas crafted with precision"
                    subtitle="Every file is engineered for clarity, credibility, and speed."
                />
                <div class="card-grid cols-4" ref={track}>
                    {
                        SERVICE_CARDS.iter().map(|service| {
                            let on_book = {
                                let on_book = props.on_book.clone();
                                let visa = service.visa;
                                Callback::from(move |_| on_book.emit(visa))
                            };
                            html! {
                                <div class="card" key={service.visa.label()}>
                                    <div class="card-top">
                                        <span class="service-icon">{service.icon}</span>
                                        <span class="tag">{"Priority"}</span>
                                    </div>
                                    <h3>{service.visa.label()}</h3>
                                    <p>{service.desc}</p>
                                    <button class="btn-ghost book-btn" onclick={on_book}>{"Book a slot →"}</button>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(WhyChoose)]
fn why_choose() -> Html {
    html! {
        <section class="section">
            <div class="container split">
                <div>
                    <SectionHeading
                        eyebrow="Why EuroLink"
                        title="Precision, proof, and premium follow-through"
                        subtitle="A boutique, audit-ready process that keeps every document, timeline, and interview flawless."
                    />
                    <div class="pillar-grid">
                        {
                            PILLARS.iter().map(|pillar| html! {
                                <div class="pillar" key={pillar.title}>
                                    <p class="pillar-title">{pillar.title}</p>
                                    <p class="pillar-desc">{pillar.desc}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
                <div class="stack-card">
                    <p class="eyebrow">{"Precision Stack"}</p>
                    <h3>{"Your visa file, production-grade"}</h3>
                    <ul class="perk-list">
                        <li>{"✔ Dual-review document engineering"}</li>
                        <li>{"✔ Financial proof curation (GIC, blocked, sponsorship)"}</li>
                        <li>{"✔ Purpose statements built for credibility"}</li>
                        <li>{"✔ Weekly progress signals and escalation paths"}</li>
                    </ul>
                    <div class="stack-grid">
                        <div class="stack-cell">
                            <p>{"Dedicated case lead"}</p>
                            <span>{"Human + tech orchestration"}</span>
                        </div>
                        <div class="stack-cell">
                            <p>{"Live status board"}</p>
                            <span>{"Milestones, docs, and approvals in one place"}</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    let category = use_state(|| Category::Student);
    let student_route = use_state(|| StudentRoute::Uk);

    let timeline = match *category {
        Category::Student => student_route.timeline(),
        Category::Work => &WORK_TIMELINE,
        Category::Visit => &VISIT_TIMELINE,
        Category::Seasonal => &SEASONAL_TIMELINE,
    };

    html! {
        <section class="section alt">
            <div class="container">
                <SectionHeading
                    eyebrow="How it works"
                    title="Switchable timelines by visa type"
                    subtitle="Pick the visa category, then dive into the exact steps."
                />
                <div class="tab-row">
                    {
                        Category::ALL.into_iter().map(|cat| {
                            let onclick = {
                                let category = category.clone();
                                Callback::from(move |_| category.set(cat))
                            };
                            html! {
                                <button
                                    key={cat.label()}
                                    class={classes!("tab", (*category == cat).then_some("active"))}
                                    onclick={onclick}
                                >
                                    {cat.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                {
                    if *category == Category::Student {
                        html! {
                            <div class="tab-row sub">
                                {
                                    StudentRoute::ALL.into_iter().map(|route| {
                                        let onclick = {
                                            let student_route = student_route.clone();
                                            Callback::from(move |_| student_route.set(route))
                                        };
                                        html! {
                                            <button
                                                key={route.label()}
                                                class={classes!("tab", "small", (*student_route == route).then_some("active"))}
                                                onclick={onclick}
                                            >
                                                {route.label()}
                                            </button>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="timeline-panel">
                    <div class="timeline-head">
                        <div>
                            <p class="eyebrow">{timeline.badge}</p>
                            <h3>{timeline.title}</h3>
                        </div>
                        <div class="note-chips">
                            {
                                timeline.notes.iter().map(|&note| html! {
                                    <span class="note-chip" key={note}>{note}</span>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <div class="timeline">
                        {
                            timeline.steps.iter().enumerate().map(|(idx, &step)| html! {
                                <div class="timeline-step" key={step}>
                                    <div class="step-num">{idx + 1}</div>
                                    <p>{step}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let track = use_node_ref();
    {
        let track = track.clone();
        use_effect_with_deps(
            move |_| {
                let interval = auto_carousel(track, 2800);
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section class="section">
            <div class="container">
                <SectionHeading
                    eyebrow="Testimonials"
                    title="Loved by students, professionals, and explorers"
                    subtitle="Stories of approvals, clarity, and confidence."
                />
                <div class="card-grid cols-3" ref={track}>
                    {
                        TESTIMONIALS.iter().map(|item| html! {
                            <div class="card quote-card" key={item.name}>
                                <p class="quote">{format!("“{}”", item.quote)}</p>
                                <div class="quote-foot">
                                    <div>
                                        <p class="quote-name">{item.name}</p>
                                        <p class="quote-tag">{item.tag}</p>
                                    </div>
                                    <span class="tag">{"Verified"}</span>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(VisitUs)]
fn visit_us() -> Html {
    html! {
        <section id="visit" class="section">
            <div class="container split">
                <div>
                    <SectionHeading
                        eyebrow="Find us"
                        title="Visit EuroLink in Kathmandu"
                        subtitle="Book a slot, then drop by — we're ready with premium guidance and coffee."
                    />
                    <p class="contact-title">{"Contact"}</p>
                    <div class="contact-chips">
                        <a class="chip-link" href={format!("tel:+977-{}", PHONE_PRIMARY)}>{PHONE_PRIMARY}</a>
                        <a class="chip-link" href={format!("tel:{}", PHONE_SECONDARY)}>{PHONE_SECONDARY}</a>
                        <a class="chip-link" href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                    </div>
                    <p class="muted">{"Open weekdays · Priority appointments available."}</p>
                    <a class="map-link" href={MAPS_URL} target="_blank" rel="noreferrer">
                        {"View on Google Maps"}
                    </a>
                </div>
                <div class="map-frame">
                    <iframe
                        title="EuroLink Visa Service location"
                        src={MAPS_EMBED_URL}
                        loading="lazy"
                        allowfullscreen=true
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="container footer-layout">
                <div class="brand">
                    <div class="brand-mark">{"EL"}</div>
                    <div>
                        <p class="footer-name">{"EuroLink Visa Service"}</p>
                        <p class="muted">{"Premium visa consultancy in Nepal"}</p>
                        <div class="contact-chips">
                            <a class="chip-link" href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                            <a class="chip-link" href={format!("tel:+977-{}", PHONE_PRIMARY)}>{PHONE_PRIMARY}</a>
                            <a class="chip-link" href={format!("tel:{}", PHONE_SECONDARY)}>{PHONE_SECONDARY}</a>
                            <a class="chip-link" href={WHATSAPP_URL} target="_blank" rel="noreferrer">{"WhatsApp"}</a>
                        </div>
                    </div>
                </div>
                <div class="social-row">
                    <a class="chip-link" href="https://www.instagram.com/eurolink_visaservice" target="_blank" rel="noreferrer">{"Instagram"}</a>
                    <a class="chip-link" href="https://www.facebook.com/profile.php?id=61576748715927" target="_blank" rel="noreferrer">{"Facebook"}</a>
                    <a class="chip-link" href="https://www.tiktok.com/@eurolink.visaservice" target="_blank" rel="noreferrer">{"TikTok"}</a>
                    <a class="chip-link" href={MAPS_URL} target="_blank" rel="noreferrer">{"Visit Us"}</a>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let prefill_type = use_state(|| None::<VisaType>);
    let consultation_ref = use_node_ref();

    // Scroll to top only on initial mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_book = {
        let prefill_type = prefill_type.clone();
        let consultation_ref = consultation_ref.clone();
        Callback::from(move |visa: VisaType| {
            prefill_type.set(Some(visa));
            if let Some(section) = consultation_ref.cast::<Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    let on_prefill_handled = {
        let prefill_type = prefill_type.clone();
        Callback::from(move |_| prefill_type.set(None))
    };

    html! {
        <div class="landing-page">
            <style>{STYLESHEET}</style>
            <Hero />
            <Countries />
            <Services on_book={on_book} />
            <WhyChoose />
            <HowItWorks />
            <Testimonials />
            <ConsultationForm
                section_ref={consultation_ref}
                prefill_type={*prefill_type}
                on_prefill_handled={on_prefill_handled}
            />
            <VisitUs />
            <Footer />
        </div>
    }
}

const STYLESHEET: &str = r#"
:root {
    --midnight: #0b1c33;
    --obsidian: #070d18;
    --brand: #0c2f5c;
    --gold: #c59b3a;
    --aurora: #7eb2ff;
    --ink: rgba(255, 255, 255, 0.92);
    --ink-soft: rgba(255, 255, 255, 0.65);
    --line: rgba(255, 255, 255, 0.12);
    --panel: rgba(255, 255, 255, 0.05);
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    background: var(--midnight);
    color: var(--ink);
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
    line-height: 1.55;
}

.landing-page a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: 1180px;
    margin: 0 auto;
    padding: 0 1.25rem;
}

.section {
    padding: 5rem 0;
    background: rgba(7, 13, 24, 0.6);
}

.section.alt {
    background: rgba(11, 28, 51, 0.6);
}

.section-heading {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin-bottom: 2.5rem;
}

.eyebrow {
    font-size: 0.8rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: var(--ink-soft);
}

.section-heading h2 {
    margin: 0;
    font-size: clamp(1.9rem, 4vw, 2.8rem);
    line-height: 1.2;
}

.section-subtitle {
    max-width: 40rem;
    margin: 0;
    font-size: 1.05rem;
    color: var(--ink-soft);
}

.split {
    display: grid;
    gap: 2.5rem;
}

@media (min-width: 900px) {
    .split {
        grid-template-columns: 1.05fr 0.95fr;
        align-items: center;
    }
}

/* Hero */

.hero {
    background: linear-gradient(180deg, var(--brand) 0%, var(--midnight) 55%, var(--obsidian) 100%);
    padding: 2.5rem 0 5rem;
    overflow: hidden;
}

.hero-topbar {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    align-items: center;
    justify-content: space-between;
    border: 1px solid var(--line);
    border-radius: 24px;
    background: var(--panel);
    padding: 0.85rem 1.1rem;
}

.brand {
    display: flex;
    align-items: center;
    gap: 0.8rem;
}

.brand-mark {
    width: 48px;
    height: 48px;
    border-radius: 14px;
    background: linear-gradient(135deg, var(--gold), #e7c877);
    color: var(--obsidian);
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.1rem;
}

.brand-line {
    margin: 0;
    font-weight: 600;
}

.brand p {
    margin: 0;
}

.contact-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 0.6rem;
    font-size: 0.85rem;
}

.chip-link {
    border: 1px solid var(--line);
    border-radius: 999px;
    padding: 0.35rem 0.9rem;
    color: var(--ink-soft);
    transition: border-color 0.2s ease, color 0.2s ease;
}

.chip-link:hover {
    border-color: rgba(197, 155, 58, 0.6);
    color: var(--ink);
}

.chip-link.whatsapp {
    display: inline-block;
    margin-top: 1.4rem;
    padding: 0.75rem 1.3rem;
    font-size: 1rem;
}

.hero-layout {
    display: grid;
    gap: 3rem;
    margin-top: 3.5rem;
}

@media (min-width: 900px) {
    .hero-layout {
        grid-template-columns: 1.1fr 0.9fr;
        align-items: center;
    }
}

.hero-badge {
    display: inline-block;
    border: 1px solid var(--line);
    border-radius: 999px;
    background: var(--panel);
    padding: 0.45rem 1rem;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.3em;
    color: var(--gold);
}

.hero-copy h1 {
    margin: 1.4rem 0 0;
    font-size: clamp(2.4rem, 6vw, 4.2rem);
    line-height: 1.12;
}

.text-gradient {
    display: block;
    background: linear-gradient(90deg, var(--gold), #e7c877, var(--aurora));
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
    color: transparent;
}

.hero-subtitle {
    max-width: 38rem;
    margin: 1.4rem 0 0;
    font-size: 1.15rem;
    color: var(--ink-soft);
}

.hero-ctas {
    display: flex;
    flex-wrap: wrap;
    gap: 0.9rem;
    margin-top: 2rem;
}

.btn-primary {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border: none;
    border-radius: 999px;
    background: linear-gradient(90deg, var(--gold), #e7c877);
    color: var(--obsidian);
    font-weight: 700;
    font-size: 1rem;
    padding: 0.85rem 1.6rem;
    cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.2s ease;
}

.btn-primary:hover {
    transform: translateY(-2px);
    box-shadow: 0 12px 28px rgba(197, 155, 58, 0.35);
}

.btn-primary:disabled {
    opacity: 0.6;
    cursor: wait;
    transform: none;
    box-shadow: none;
}

.btn-ghost {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    border: 1px solid var(--line);
    border-radius: 999px;
    background: transparent;
    color: var(--ink);
    font-size: 0.95rem;
    padding: 0.8rem 1.4rem;
    cursor: pointer;
    transition: border-color 0.2s ease;
}

.btn-ghost:hover {
    border-color: rgba(197, 155, 58, 0.6);
}

.stat-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 1rem;
    max-width: 26rem;
    margin-top: 2.2rem;
}

.stat-card {
    border: 1px solid var(--line);
    border-radius: 18px;
    background: var(--panel);
    padding: 1rem 1.2rem;
}

.stat-value {
    font-size: 1.6rem;
    font-weight: 700;
}

.stat-label {
    font-size: 0.72rem;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: var(--ink-soft);
}

.advisory-card {
    border: 1px solid var(--line);
    border-radius: 32px;
    background: linear-gradient(145deg, rgba(255, 255, 255, 0.07), rgba(255, 255, 255, 0.03));
    backdrop-filter: blur(12px);
    padding: 1.75rem;
}

.advisory-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1.6rem;
}

.advisory-head h3 {
    margin: 0.3rem 0 0;
}

.live-pill {
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.1);
    padding: 0.35rem 0.85rem;
    font-size: 0.75rem;
    color: var(--ink-soft);
}

.live-pill::before {
    content: '';
    display: inline-block;
    width: 8px;
    height: 8px;
    margin-right: 0.45rem;
    border-radius: 50%;
    background: #34d399;
}

.track-row {
    border-radius: 18px;
    background: var(--panel);
    padding: 0.95rem 1.1rem;
    margin-bottom: 0.85rem;
}

.track-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.track-head p {
    margin: 0;
    font-weight: 500;
}

.track-head span {
    font-size: 0.78rem;
    color: var(--ink-soft);
    white-space: nowrap;
}

.track-bar {
    height: 6px;
    margin-top: 0.7rem;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.1);
}

.track-fill {
    width: 66%;
    height: 100%;
    border-radius: 999px;
    background: linear-gradient(90deg, var(--brand), var(--gold));
    transition: width 0.3s ease;
}

.track-row:hover .track-fill {
    width: 80%;
}

.advisory-foot {
    margin: 1.4rem 0 0;
    border: 1px solid var(--line);
    border-radius: 18px;
    background: var(--panel);
    padding: 1rem;
    font-size: 0.92rem;
    color: var(--ink-soft);
}

/* Cards */

.card-grid {
    display: grid;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .card-grid.cols-3 {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }

    .card-grid.cols-4 {
        grid-template-columns: repeat(4, minmax(0, 1fr));
    }
}

@media (max-width: 767px) {
    .card-grid {
        display: flex;
        gap: 1rem;
        overflow-x: auto;
        scroll-snap-type: x mandatory;
        padding-bottom: 0.75rem;
        -webkit-overflow-scrolling: touch;
    }

    .card-grid .card {
        min-width: 78%;
        scroll-snap-align: center;
    }
}

.card {
    position: relative;
    overflow: hidden;
    display: flex;
    flex-direction: column;
    gap: 0.85rem;
    border: 1px solid var(--line);
    border-radius: 24px;
    background: var(--panel);
    padding: 1.5rem;
    transition: transform 0.25s ease, border-color 0.25s ease;
}

.card:hover {
    transform: translateY(-6px);
    border-color: rgba(197, 155, 58, 0.4);
}

.card h3 {
    margin: 0;
    font-size: 1.4rem;
}

.card p {
    margin: 0;
    color: var(--ink-soft);
}

.card-accent {
    position: absolute;
    inset: 0;
    opacity: 0.1;
    pointer-events: none;
}

.card > *:not(.card-accent) {
    position: relative;
}

.tag {
    align-self: flex-start;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.1);
    padding: 0.3rem 0.8rem;
    font-size: 0.68rem;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    color: var(--ink-soft);
}

.card-top {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.service-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 48px;
    height: 48px;
    border-radius: 16px;
    background: rgba(255, 255, 255, 0.1);
    font-size: 1.5rem;
}

.book-btn {
    margin-top: auto;
    align-self: flex-start;
    font-size: 0.85rem;
}

/* Why choose */

.pillar-grid {
    display: grid;
    gap: 1rem;
}

@media (min-width: 700px) {
    .pillar-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

.pillar {
    border: 1px solid var(--line);
    border-radius: 18px;
    background: var(--panel);
    padding: 1rem 1.1rem;
}

.pillar-title {
    margin: 0 0 0.4rem;
    font-weight: 600;
}

.pillar-desc {
    margin: 0;
    font-size: 0.92rem;
    color: var(--ink-soft);
}

.stack-card {
    border: 1px solid var(--line);
    border-radius: 28px;
    background: linear-gradient(145deg, rgba(12, 47, 92, 0.5), rgba(7, 13, 24, 0.9));
    padding: 1.75rem;
}

.stack-card h3 {
    margin: 0.6rem 0 1rem;
    font-size: 1.8rem;
}

.perk-list {
    margin: 0;
    padding: 0;
    list-style: none;
    display: flex;
    flex-direction: column;
    gap: 0.65rem;
    color: var(--ink-soft);
}

.stack-grid {
    display: grid;
    gap: 1rem;
    margin-top: 1.5rem;
}

@media (min-width: 600px) {
    .stack-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

.stack-cell {
    border: 1px solid var(--line);
    border-radius: 18px;
    background: var(--panel);
    padding: 1rem;
}

.stack-cell p {
    margin: 0 0 0.25rem;
}

.stack-cell span {
    font-size: 0.85rem;
    color: var(--ink-soft);
}

/* How it works */

.tab-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.7rem;
    margin-bottom: 1.4rem;
}

.tab {
    border: 1px solid var(--line);
    border-radius: 999px;
    background: transparent;
    color: var(--ink-soft);
    font-weight: 600;
    font-size: 0.9rem;
    padding: 0.55rem 1.1rem;
    cursor: pointer;
    transition: background 0.2s ease, color 0.2s ease;
}

.tab:hover {
    color: var(--ink);
}

.tab:focus-visible {
    outline: 2px solid rgba(197, 155, 58, 0.7);
    outline-offset: 2px;
}

.tab.active {
    background: rgba(255, 255, 255, 0.1);
    color: var(--ink);
}

.tab.small {
    font-size: 0.78rem;
    padding: 0.35rem 0.85rem;
}

.timeline-panel {
    border: 1px solid var(--line);
    border-radius: 32px;
    background: linear-gradient(145deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0.03));
    padding: 1.75rem;
}

.timeline-head {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.timeline-head h3 {
    margin: 0.4rem 0 0;
    font-size: 1.6rem;
}

.note-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.note-chip {
    border: 1px solid var(--line);
    border-radius: 999px;
    background: var(--panel);
    padding: 0.3rem 0.8rem;
    font-size: 0.78rem;
    color: var(--ink-soft);
}

.timeline {
    position: relative;
    display: flex;
    flex-direction: column;
    gap: 1.4rem;
    margin-top: 2.2rem;
    padding-left: 2.2rem;
}

.timeline::before {
    content: '';
    position: absolute;
    top: 0;
    bottom: 0;
    left: 1.3rem;
    width: 2px;
    background: linear-gradient(180deg, rgba(197, 155, 58, 0.9), rgba(255, 255, 255, 0.25), transparent);
}

.timeline-step {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
    border: 1px solid var(--line);
    border-radius: 22px;
    background: var(--panel);
    padding: 1.1rem 1.25rem;
}

.timeline-step p {
    margin: 0.35rem 0 0;
    color: var(--ink);
}

.step-num {
    flex-shrink: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 42px;
    height: 42px;
    border-radius: 14px;
    background: linear-gradient(135deg, var(--brand), var(--gold));
    font-weight: 700;
}

/* Testimonials */

.quote-card {
    justify-content: space-between;
}

.quote {
    font-size: 1.05rem;
    color: var(--ink);
}

.quote-foot {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    margin-top: 1.2rem;
    font-size: 0.88rem;
}

.quote-name {
    margin: 0;
    font-weight: 600;
}

.quote-tag {
    margin: 0.15rem 0 0;
    color: var(--ink-soft);
}

/* Consultation */

.consultation-intro h2 {
    margin: 0.8rem 0;
    font-size: clamp(1.9rem, 4vw, 2.6rem);
}

.consultation-form {
    display: flex;
    flex-direction: column;
    gap: 1.1rem;
    border: 1px solid var(--line);
    border-radius: 28px;
    background: linear-gradient(145deg, rgba(255, 255, 255, 0.07), rgba(255, 255, 255, 0.03));
    backdrop-filter: blur(12px);
    padding: 1.75rem;
}

.field {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.field label {
    font-size: 0.85rem;
    color: var(--ink-soft);
}

.field input,
.field select {
    border: 1px solid var(--line);
    border-radius: 16px;
    background: rgba(255, 255, 255, 0.05);
    color: var(--ink);
    font-size: 1rem;
    padding: 0.8rem 1rem;
    outline: none;
    transition: border-color 0.2s ease, background 0.2s ease;
}

.field input:focus,
.field select:focus {
    border-color: rgba(126, 178, 255, 0.7);
    background: rgba(255, 255, 255, 0.1);
}

.field select option {
    background: var(--midnight);
}

.field-row {
    display: grid;
    gap: 1.1rem;
}

@media (min-width: 640px) {
    .field-row {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

.form-message {
    margin: 0;
    font-size: 0.92rem;
}

.form-message.error {
    color: #fda4af;
}

.form-message.success {
    color: #6ee7b7;
}

/* Visit us / footer */

.contact-title {
    margin: 0 0 0.8rem;
    font-size: 1.1rem;
    font-weight: 600;
}

.muted {
    color: var(--ink-soft);
    font-size: 0.9rem;
}

.map-link {
    display: inline-block;
    margin-top: 0.9rem;
    color: var(--gold);
}

.map-link:hover {
    color: var(--ink);
}

.map-frame {
    overflow: hidden;
    border: 1px solid var(--line);
    border-radius: 24px;
}

.map-frame iframe {
    display: block;
    width: 100%;
    height: 360px;
    border: none;
}

.footer {
    border-top: 1px solid var(--line);
    background: rgba(7, 13, 24, 0.85);
    padding: 2.6rem 0;
    color: var(--ink-soft);
}

.footer-layout {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1.5rem;
}

.footer-name {
    margin: 0 0 0.2rem;
    font-size: 1.2rem;
    font-weight: 600;
    color: var(--ink);
}

.footer .contact-chips {
    margin-top: 0.7rem;
}

.social-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.7rem;
    font-size: 0.9rem;
}
"#;
