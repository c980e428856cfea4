use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::anthem_modal::AnthemModal;
use crate::components::chat_widget::ChatWidget;
use crate::components::contact_form::ContactForm;
use crate::components::lazy_image::LazyImageController;
use crate::components::lightbox::GalleryLightbox;
use crate::components::navbar::Navbar;
use crate::components::parallax::ParallaxController;
use crate::components::registration_popup::RegistrationPopup;
use crate::components::reveal::ScrollRevealController;
use crate::components::slider::HeroSlider;
use crate::components::stats::StatsSection;
use crate::components::testimonials::TestimonialsCarousel;
use crate::data::content::{LEVELS, NEWS};

#[function_component(Home)]
pub fn home() -> Html {
    // Start at the top on a fresh mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let year = Utc::now().year();

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page section { padding: 72px 24px; }
                    .home-page section h2 {
                        text-align: center;
                        color: #0a2463;
                        font-size: 2rem;
                        margin-bottom: 40px;
                    }
                    .section-inner { max-width: 1100px; margin: 0 auto; }
                    #inicio { padding: 0; }
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 48px;
                        align-items: center;
                    }
                    @media (max-width: 860px) { .about-grid { grid-template-columns: 1fr; } }
                    .about-text p { line-height: 1.8; color: #333; margin-bottom: 14px; }
                    .about-image { overflow: hidden; border-radius: 10px; }
                    .about-image img { width: 100%; display: block; }
                    .levels-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 24px;
                    }
                    .level-card {
                        background: #fff;
                        border-radius: 10px;
                        box-shadow: 0 4px 16px rgba(0,0,0,0.08);
                        padding: 32px 26px;
                        border-top: 4px solid #d62828;
                    }
                    .level-card h3 { color: #0a2463; margin-bottom: 4px; }
                    .level-ages { color: #d62828; font-size: 0.9rem; margin-bottom: 12px; }
                    .level-card p { line-height: 1.7; color: #444; }
                    #niveles, #testimonios { background: #f4f6fa; }
                    .news-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 24px;
                    }
                    .news-card {
                        background: #fff;
                        border-radius: 10px;
                        overflow: hidden;
                        box-shadow: 0 4px 16px rgba(0,0,0,0.08);
                    }
                    .news-card img { width: 100%; height: 180px; object-fit: cover; display: block; }
                    .news-body { padding: 20px; }
                    .news-date { font-size: 0.8rem; color: #888; }
                    .news-card h3 { color: #0a2463; margin: 8px 0; font-size: 1.1rem; }
                    .news-body p { color: #444; line-height: 1.6; font-size: 0.95rem; }
                    .reveal {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .reveal.revealed { opacity: 1; transform: none; }
                    .admissions-lead { text-align: center; color: #444; max-width: 640px; margin: -24px auto 36px; line-height: 1.7; }
                    .site-footer {
                        background: #0a2463;
                        color: #cdd6ea;
                        text-align: center;
                        padding: 36px 24px;
                        font-size: 0.9rem;
                        line-height: 1.9;
                    }
                "#}
            </style>

            <Navbar />

            <section id="inicio">
                <HeroSlider />
            </section>

            <section id="nosotros">
                <div class="section-inner">
                    <h2>{"Nosotros"}</h2>
                    <div class="about-grid">
                        <div class="about-text reveal">
                            <p>
                                {"Desde 1987 el Colegio Nueva Aurora forma estudiantes \
                                  íntegros, curiosos y comprometidos con su comunidad. \
                                  Nuestro proyecto educativo une la exigencia académica \
                                  con la formación en valores."}
                            </p>
                            <p>
                                {"Contamos con un campus de 12 000 m², laboratorios de \
                                  ciencia y robótica, biblioteca, losas deportivas y \
                                  talleres artísticos para los tres niveles."}
                            </p>
                            <AnthemModal />
                        </div>
                        <div class="about-image">
                            <img
                                class="parallax-img"
                                data-src="/assets/nosotros/campus.jpg"
                                alt="Campus del colegio"
                            />
                        </div>
                    </div>
                </div>
            </section>

            <section id="niveles">
                <div class="section-inner">
                    <h2>{"Niveles educativos"}</h2>
                    <div class="levels-grid">
                        {
                            LEVELS.iter().map(|level| html! {
                                <div class="level-card reveal" id={level.id}>
                                    <h3>{level.name}</h3>
                                    <div class="level-ages">{level.ages}</div>
                                    <p>{level.description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <StatsSection />

            <section id="galeria">
                <div class="section-inner">
                    <h2>{"Galería"}</h2>
                    <GalleryLightbox />
                </div>
            </section>

            <section id="testimonios">
                <div class="section-inner">
                    <h2>{"Testimonios"}</h2>
                    <TestimonialsCarousel />
                </div>
            </section>

            <section id="noticias">
                <div class="section-inner">
                    <h2>{"Noticias"}</h2>
                    <div class="news-grid">
                        {
                            NEWS.iter().map(|item| html! {
                                <article class="news-card reveal">
                                    <img data-src={item.image} alt={item.title} />
                                    <div class="news-body">
                                        <span class="news-date">{item.date}</span>
                                        <h3>{item.title}</h3>
                                        <p>{item.summary}</p>
                                    </div>
                                </article>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section id="admisiones">
                <div class="section-inner">
                    <h2>{"Admisiones"}</h2>
                    <p class="admissions-lead">
                        {"Completa el formulario y te contactaremos por WhatsApp con \
                          toda la información del proceso, costos y visitas guiadas."}
                    </p>
                    <ContactForm />
                </div>
            </section>

            <footer class="site-footer">
                <div>{"Colegio Nueva Aurora · Av. Los Cipreses 450, Lima"}</div>
                <div>{"(01) 555-0134 · informes@nuevaaurora.edu.pe"}</div>
                <div>{format!("© {year} Colegio Nueva Aurora. Todos los derechos reservados.")}</div>
            </footer>

            <RegistrationPopup />
            <ChatWidget />

            // The document-scanning controllers mount last, once the sections exist.
            <ScrollRevealController />
            <LazyImageController />
            <ParallaxController />
        </div>
    }
}
