//! Home page
//!
//! Marketing sections:
//! - Hero with a call to sign up
//! - Market-driven pricing explanation

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::routes;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Nori - Carbon Removal Marketplace"/>
        <Meta
            name="description"
            content="Buy verified carbon removal directly from the farmers who produce it."
        />

        <div class="min-h-screen flex flex-col">
            <Header />

            <section class="py-20 px-4">
                <div class="container max-w-5xl mx-auto text-center">
                    <h1 class="text-4xl lg:text-6xl font-bold mb-6">"Reverse climate change"</h1>
                    <p class="text-lg lg:text-xl text-gray-600 max-w-2xl mx-auto mb-10">
                        "Nori connects farmers who pull carbon out of the atmosphere with the people and businesses who want to pay for it."
                    </p>
                    <A
                        href=routes::SIGNUP
                        attr:class="inline-block px-6 py-3 bg-primary text-white font-medium rounded-lg"
                    >
                        "Get started"
                    </A>
                </div>
            </section>

            <MarketDrivenSection />

            <footer class="py-6 border-t mt-auto">
                <p class="text-center text-sm text-gray-500">"© Nori. All rights reserved."</p>
            </footer>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="border-b">
            <div class="container max-w-5xl mx-auto px-4 flex items-center justify-between h-16">
                <A href=routes::HOME attr:class="flex items-center gap-2 font-bold text-xl">
                    <Icon name=icons::LEAF class="w-6 h-6" />
                    "Nori"
                </A>
                <A href=routes::SIGNUP attr:class="text-primary font-medium">"Sign up"</A>
            </div>
        </header>
    }
}

/// How carbon removal is priced on the marketplace
#[component]
fn MarketDrivenSection() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-t from-[#1EA8AA] to-blue-900 py-12 lg:py-24">
            <div class="container max-w-5xl mx-auto px-4 lg:px-0">
                <div class="flex flex-col gap-3 lg:gap-6">
                    <h2 class="text-3xl font-bold text-white text-center lg:text-left">
                        "Market Driven Pricing"
                    </h2>
                    <p class="text-white text-center lg:text-left mt-6 lg:mt-0">
                        "Currently, carbon removal prices are set by farmers. Soon, the price will be dynamically set by the market using the NORI Token."
                    </p>
                    <p class="text-white text-center lg:text-left">
                        "100% of each tonne you pay for goes directly to supporting our suppliers, while we collect an additional 15% transaction fee to keep the marketplace running."
                    </p>
                    <p class="text-white text-center lg:text-left">
                        "Like a gift card, one NORI will always be redeemable for one tonne of carbon removal."
                    </p>
                </div>
            </div>
        </section>
    }
}
