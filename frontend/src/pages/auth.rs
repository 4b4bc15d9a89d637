//! 登录、注册、找回密码与 OAuth 回调页面

use crate::components::form::{SubmitButton, TextArea, TextField, field_error};
use crate::components::icons::ShieldCheck;
use crate::store::{use_api, use_store};
use crate::web::router::{Link, assign_location, use_router};
use charity_directory::AuthHook;
use charity_directory::guard::{ORG_DASHBOARD_PATH, USER_DASHBOARD_PATH, dashboard_for, redirect_target};
use charity_directory::services::{OAuthCallback, OAuthCallbackParams};
use charity_directory::validation::{
    FieldErrors, ForgotPasswordForm, LoginForm, OrganizationLoginForm, OrganizationSignupForm,
    ResetPasswordForm, SignupForm,
};
use charity_shared::{CategorySummary, Timestamp};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 居中的卡片布局
#[component]
fn AuthCard(#[prop(into)] title: String, #[prop(into)] subtitle: String, children: Children) -> impl IntoView {
    view! {
        <div class="hero min-h-[70vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4 flex flex-col items-center gap-2">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <ShieldCheck />
                    </div>
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="text-base-content/70">{subtitle}</p>
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">{children()}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    let on_submit = {
        let api = api.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let form = LoginForm {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            if let Err(e) = form.validate() {
                errors.set(e);
                return;
            }
            errors.set(FieldErrors::default());
            submitting.set(true);

            let api = api.clone();
            spawn_local(async move {
                let result = AuthHook::new(&api, &store)
                    .login(&form.email, &form.password)
                    .await;
                submitting.set(false);
                if let Ok(session) = result {
                    let search = router.location().get_untracked().search;
                    let target = redirect_target(&search).unwrap_or_else(|| {
                        dashboard_for(session.user.as_ref().map(|u| u.role)).to_string()
                    });
                    router.navigate(&target);
                }
            });
        }
    };

    let on_google = move |_| {
        let _ = AuthHook::new(&api, &store).initiate_google_oauth(assign_location);
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Sign in to save organizations and track your searches">
            <form on:submit=on_submit class="flex flex-col gap-2">
                <TextField label="Email" name="email" input_type="email" value=email error=field_error(errors, "email") />
                <TextField label="Password" name="password" input_type="password" value=password error=field_error(errors, "password") />
                <div class="text-right">
                    <Link to="/forgot-password" class="link link-hover text-sm">"Forgot password?"</Link>
                </div>
                <SubmitButton label="Sign In" busy_label="Signing in..." busy=submitting.into() />
            </form>
            <div class="divider">"or"</div>
            <button class="btn btn-outline w-full" on:click=on_google>"Continue with Google"</button>
            <p class="text-center text-sm mt-2">
                "Don't have an account? "
                <Link to="/signup" class="link link-primary">"Sign up"</Link>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn OrganizationLoginPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = OrganizationLoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = form.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let result = AuthHook::new(&api, &store)
                .organization_login(&form.email, &form.password)
                .await;
            submitting.set(false);
            match result {
                Ok(true) => router.navigate(ORG_DASHBOARD_PATH),
                Ok(false) => router.navigate(USER_DASHBOARD_PATH),
                Err(_) => {}
            }
        });
    };

    view! {
        <AuthCard title="Organization Login" subtitle="Manage your organization's listing">
            <form on:submit=on_submit class="flex flex-col gap-2">
                <TextField label="Organization Email" name="email" input_type="email" value=email error=field_error(errors, "email") />
                <TextField label="Password" name="password" input_type="password" value=password error=field_error(errors, "password") />
                <SubmitButton label="Sign In" busy_label="Signing in..." busy=submitting.into() />
            </form>
            <p class="text-center text-sm mt-2">
                "New organization? "
                <Link to="/organization-signup" class="link link-primary">"Register here"</Link>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let router = use_router();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        if let Err(e) = form.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let result = AuthHook::new(&api, &store)
                .signup(form.name.trim(), form.email.trim(), &form.password)
                .await;
            submitting.set(false);
            match result {
                Ok(session) if session.user.is_some() && store.select_untracked(|s| s.is_authenticated) => {
                    router.navigate(dashboard_for(session.user.as_ref().map(|u| u.role)))
                }
                Ok(_) => router.navigate("/login"),
                Err(_) => {}
            }
        });
    };

    view! {
        <AuthCard title="Create an Account" subtitle="Sign up to see the Unseen">
            <form on:submit=on_submit class="flex flex-col gap-2">
                <TextField label="Full Name" name="name" value=name error=field_error(errors, "name") />
                <TextField label="Email" name="email" input_type="email" value=email error=field_error(errors, "email") />
                <TextField label="Password" name="password" input_type="password" value=password error=field_error(errors, "password") />
                <TextField label="Confirm Password" name="confirm_password" input_type="password" value=confirm error=field_error(errors, "confirm_password") />
                <SubmitButton label="Sign Up" busy_label="Creating account..." busy=submitting.into() />
            </form>
            <p class="text-center text-sm mt-2">
                "Already have an account? "
                <Link to="/login" class="link link-primary">"Sign in"</Link>
            </p>
        </AuthCard>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = ForgotPasswordForm {
            email: email.get_untracked(),
        };
        if let Err(e) = form.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let result = AuthHook::new(&api, &store)
                .forgot_password(form.email.trim())
                .await;
            submitting.set(false);
            sent.set(result.is_ok());
        });
    };

    view! {
        <AuthCard title="Forgot Password" subtitle="We'll email you a link to reset it">
            <Show
                when=move || !sent.get()
                fallback=|| view! {
                    <div class="alert alert-info">
                        "Check your email for password reset instructions."
                    </div>
                    <Link to="/login" class="btn btn-ghost">"Back to login"</Link>
                }
            >
                <form on:submit=on_submit.clone() class="flex flex-col gap-2">
                    <TextField label="Email" name="email" input_type="email" value=email error=field_error(errors, "email") />
                    <SubmitButton label="Send Reset Link" busy_label="Sending..." busy=submitting.into() />
                </form>
            </Show>
        </AuthCard>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let router = use_router();
    let token = router.location().get_untracked().query("token");

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    let has_token = token.is_some();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(token) = token.clone() else {
            return;
        };
        let form = ResetPasswordForm {
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
        };
        if let Err(e) = form.validate() {
            errors.set(e);
            return;
        }
        errors.set(FieldErrors::default());
        submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let result = AuthHook::new(&api, &store)
                .reset_password(&token, &form.password)
                .await;
            submitting.set(false);
            if result.is_ok() {
                router.navigate("/login");
            }
        });
    };

    view! {
        <AuthCard title="Reset Password" subtitle="Choose a new password">
            <Show
                when=move || has_token
                fallback=|| view! {
                    <div class="alert alert-error">"Invalid or missing reset token."</div>
                    <Link to="/forgot-password" class="btn btn-ghost">"Request a new link"</Link>
                }
            >
                <form on:submit=on_submit.clone() class="flex flex-col gap-2">
                    <TextField label="New Password" name="password" input_type="password" value=password error=field_error(errors, "password") />
                    <TextField label="Confirm Password" name="confirm_password" input_type="password" value=confirm error=field_error(errors, "confirm_password") />
                    <SubmitButton label="Reset Password" busy_label="Resetting..." busy=submitting.into() />
                </form>
            </Show>
        </AuthCard>
    }
}

/// `/auth/callback`：读取 OAuth 回调参数，建立会话后跳转
#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let router = use_router();

    let search = router.location().get_untracked().search;
    let params = OAuthCallbackParams::from_query(&search);

    spawn_local(async move {
        let result = AuthHook::new(&api, &store)
            .complete_oauth_callback(&params, Timestamp::now())
            .await;
        match result {
            Ok(OAuthCallback::Linked(_)) => router.replace("/profile"),
            Ok(OAuthCallback::SignedIn { .. }) => {
                router.replace(dashboard_for(store.select_untracked(|s| s.role())))
            }
            Err(_) => router.replace("/login"),
        }
    });

    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] gap-4">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p>"Completing sign in..."</p>
        </div>
    }
}

#[component]
pub fn OrganizationSignupPage() -> impl IntoView {
    let api = use_api();
    let store = use_store();
    let router = use_router();

    let categories = RwSignal::new(Vec::<CategorySummary>::new());
    {
        let api = api.clone();
        spawn_local(async move {
            categories.set(api.org_signup().categories().await.data);
        });
    }

    let organization_name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let mission = RwSignal::new(String::new());
    let website = RwSignal::new(String::new());
    let admin_name = RwSignal::new(String::new());
    let admin_email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state_province = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let agree = RwSignal::new(false);
    let verify = RwSignal::new(false);

    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = OrganizationSignupForm {
            organization_name: organization_name.get_untracked(),
            category_id: category.get_untracked().parse().ok(),
            mission: mission.get_untracked(),
            website: website.get_untracked(),
            admin_name: admin_name.get_untracked(),
            admin_email: admin_email.get_untracked(),
            phone: phone.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm.get_untracked(),
            address: address.get_untracked(),
            city: city.get_untracked(),
            state_province: state_province.get_untracked(),
            country: country.get_untracked(),
            agree_to_terms: agree.get_untracked(),
            verify_information: verify.get_untracked(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::default());
        submitting.set(true);

        let api = api.clone();
        spawn_local(async move {
            let result = AuthHook::new(&api, &store)
                .organization_signup(&request)
                .await;
            submitting.set(false);
            if result.is_ok() {
                if store.select_untracked(|s| s.is_authenticated) {
                    router.navigate(dashboard_for(store.select_untracked(|s| s.role())));
                } else {
                    router.navigate("/organization-login");
                }
            }
        });
    };

    let category_error = field_error(errors, "category");
    let checkbox_error = move |field: &'static str| field_error(errors, field);

    view! {
        <div class="max-w-3xl mx-auto p-4 md:p-8">
            <h1 class="text-3xl font-bold mb-2">"Register Your Organization"</h1>
            <p class="text-base-content/70 mb-6">
                "Applications are reviewed before your listing goes live."
            </p>
            <form on:submit=on_submit class="card bg-base-100 shadow-xl">
                <div class="card-body gap-4">
                    <h2 class="card-title">"Organization"</h2>
                    <TextField label="Organization Name" name="organization_name" value=organization_name error=field_error(errors, "organization_name") />
                    <label class="form-control w-full">
                        <div class="label"><span class="label-text">"Category"</span></div>
                        <select
                            class="select select-bordered"
                            prop:value=category
                            on:change=move |ev| category.set(event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {move || categories.get().into_iter().map(|c| view! {
                                <option value=c.id.to_string()>{c.name}</option>
                            }).collect_view()}
                        </select>
                        {move || category_error.get().map(|m| view! {
                            <div class="label"><span class="label-text-alt text-error">{m}</span></div>
                        })}
                    </label>
                    <TextArea label="Mission Statement" name="mission" value=mission error=field_error(errors, "mission") />
                    <TextField label="Website" name="website" value=website error=field_error(errors, "website") />

                    <h2 class="card-title">"Administrator"</h2>
                    <TextField label="Admin Name" name="admin_name" value=admin_name error=field_error(errors, "admin_name") />
                    <TextField label="Admin Email" name="admin_email" input_type="email" value=admin_email error=field_error(errors, "admin_email") />
                    <TextField label="Phone" name="phone" value=phone error=field_error(errors, "phone") />
                    <TextField label="Password" name="password" input_type="password" value=password error=field_error(errors, "password") />
                    <TextField label="Confirm Password" name="confirm_password" input_type="password" value=confirm error=field_error(errors, "confirm_password") />

                    <h2 class="card-title">"Location"</h2>
                    <TextField label="Address" name="address" value=address error=field_error(errors, "address") />
                    <TextField label="City" name="city" value=city error=field_error(errors, "city") />
                    <TextField label="State / Province" name="state_province" value=state_province error=field_error(errors, "state_province") />
                    <TextField label="Country" name="country" value=country error=field_error(errors, "country") />

                    <label class="label cursor-pointer justify-start gap-3">
                        <input type="checkbox" class="checkbox" prop:checked=agree on:change=move |ev| agree.set(event_target_checked(&ev)) />
                        <span class="label-text">"I agree to the terms and conditions"</span>
                    </label>
                    {move || checkbox_error("agree_to_terms").get().map(|m| view! { <span class="text-error text-sm">{m}</span> })}
                    <label class="label cursor-pointer justify-start gap-3">
                        <input type="checkbox" class="checkbox" prop:checked=verify on:change=move |ev| verify.set(event_target_checked(&ev)) />
                        <span class="label-text">"I verify that the information provided is accurate"</span>
                    </label>
                    {move || checkbox_error("verify_information").get().map(|m| view! { <span class="text-error text-sm">{m}</span> })}

                    <SubmitButton label="Submit Application" busy_label="Submitting..." busy=submitting.into() />
                </div>
            </form>
        </div>
    }
}
