//! Translated copy for every (template, locale) pair
//!
//! Lines may contain `{{variable}}` placeholders; they are substituted by
//! the [`TemplateEngine`](super::TemplateEngine).

use super::EmailTemplate;
use crate::locale::Locale;

/// Copy of one email in one locale
#[derive(Debug, Clone, Copy)]
pub struct TemplateText {
    pub subject: &'static str,
    pub title: &'static str,
    pub greeting: &'static str,
    /// Paragraphs above the call-to-action button
    pub intro: &'static [&'static str],
    pub button: &'static str,
    /// Paragraphs below the button
    pub outro: &'static [&'static str],
    /// Hint shown above the raw link
    pub alternative: &'static str,
    pub footer: &'static str,
}

pub fn text(template: EmailTemplate, locale: Locale) -> &'static TemplateText {
    match (template, locale) {
        (EmailTemplate::ForgotPassword, Locale::En) => &FORGOT_PASSWORD_EN,
        (EmailTemplate::ForgotPassword, Locale::Fr) => &FORGOT_PASSWORD_FR,
        (EmailTemplate::EmailVerification, Locale::En) => &EMAIL_VERIFICATION_EN,
        (EmailTemplate::EmailVerification, Locale::Fr) => &EMAIL_VERIFICATION_FR,
        (EmailTemplate::EmailChangeVerification, Locale::En) => &EMAIL_CHANGE_VERIFICATION_EN,
        (EmailTemplate::EmailChangeVerification, Locale::Fr) => &EMAIL_CHANGE_VERIFICATION_FR,
        (EmailTemplate::EmailChangeNotification, Locale::En) => &EMAIL_CHANGE_NOTIFICATION_EN,
        (EmailTemplate::EmailChangeNotification, Locale::Fr) => &EMAIL_CHANGE_NOTIFICATION_FR,
    }
}

const FOOTER_EN: &str = "Best regards,\nThe {{app_name}} Team";
const FOOTER_FR: &str = "Cordialement,\nL'équipe {{app_name}}";
const ALTERNATIVE_EN: &str =
    "If the button doesn't work, you can copy and paste this link into your browser:";
const ALTERNATIVE_FR: &str =
    "Si le bouton ne fonctionne pas, vous pouvez copier et coller ce lien dans votre navigateur :";

const FORGOT_PASSWORD_EN: TemplateText = TemplateText {
    subject: "Reset your password - {{app_name}}",
    title: "Reset your password",
    greeting: "Hello",
    intro: &["You requested to reset your password. Click the button below to reset it:"],
    button: "Reset Password",
    outro: &[
        "This link will expire in 1 hour.",
        "If you didn't request this, please ignore this email.",
    ],
    alternative: ALTERNATIVE_EN,
    footer: FOOTER_EN,
};

const FORGOT_PASSWORD_FR: TemplateText = TemplateText {
    subject: "Réinitialisez votre mot de passe - {{app_name}}",
    title: "Réinitialisez votre mot de passe",
    greeting: "Bonjour",
    intro: &["Vous avez demandé à réinitialiser votre mot de passe. Cliquez sur le bouton ci-dessous pour le réinitialiser :"],
    button: "Réinitialiser le mot de passe",
    outro: &[
        "Ce lien expirera dans 1 heure.",
        "Si vous n'avez pas fait cette demande, veuillez ignorer cet email.",
    ],
    alternative: ALTERNATIVE_FR,
    footer: FOOTER_FR,
};

const EMAIL_VERIFICATION_EN: TemplateText = TemplateText {
    subject: "Verify your email address - {{app_name}}",
    title: "Verify your email address",
    greeting: "Hello",
    intro: &["Thanks for signing up. Please confirm your email address by clicking the button below:"],
    button: "Verify Email",
    outro: &[
        "This verification link will expire in 24 hours.",
        "If you didn't create an account, you can safely ignore this email.",
    ],
    alternative: ALTERNATIVE_EN,
    footer: FOOTER_EN,
};

const EMAIL_VERIFICATION_FR: TemplateText = TemplateText {
    subject: "Vérifiez votre adresse email - {{app_name}}",
    title: "Vérifiez votre adresse e-mail",
    greeting: "Bonjour",
    intro: &["Merci pour votre inscription. Veuillez confirmer votre adresse e-mail en cliquant sur le bouton ci-dessous :"],
    button: "Vérifier l'adresse e-mail",
    outro: &[
        "Ce lien de vérification expirera dans 24 heures.",
        "Si vous n'avez pas créé de compte, vous pouvez ignorer cet e-mail.",
    ],
    alternative: ALTERNATIVE_FR,
    footer: FOOTER_FR,
};

const EMAIL_CHANGE_VERIFICATION_EN: TemplateText = TemplateText {
    subject: "Verify your new email address - {{app_name}}",
    title: "Verify Your New Email Address",
    greeting: "Hello",
    intro: &[
        "You have requested to change your email address to: {{new_email}}",
        "To complete this change, please click the button below to verify your new email address:",
    ],
    button: "Verify New Email",
    outro: &[
        "This verification link will expire in 24 hours.",
        "If you didn't request this change, please ignore this email or contact our support team.",
    ],
    alternative: ALTERNATIVE_EN,
    footer: FOOTER_EN,
};

const EMAIL_CHANGE_VERIFICATION_FR: TemplateText = TemplateText {
    subject: "Vérifiez votre nouvelle adresse e-mail - {{app_name}}",
    title: "Vérifiez Votre Nouvelle Adresse E-mail",
    greeting: "Bonjour",
    intro: &[
        "Vous avez demandé à changer votre adresse e-mail vers : {{new_email}}",
        "Pour finaliser ce changement, veuillez cliquer sur le bouton ci-dessous pour vérifier votre nouvelle adresse e-mail :",
    ],
    button: "Vérifier la Nouvelle Adresse",
    outro: &[
        "Ce lien de vérification expirera dans 24 heures.",
        "Si vous n'avez pas demandé ce changement, veuillez ignorer cet e-mail ou contacter notre équipe de support.",
    ],
    alternative: ALTERNATIVE_FR,
    footer: FOOTER_FR,
};

const EMAIL_CHANGE_NOTIFICATION_EN: TemplateText = TemplateText {
    subject: "Your email address has been changed - {{app_name}}",
    title: "Email Address Change Notification",
    greeting: "Hello",
    intro: &[
        "This is to inform you that your email address has been successfully changed.",
        "Previous email: {{old_email}}",
        "New email: {{new_email}}",
        "If you made this change, no further action is required.",
        "If you did not request this change, your account may have been compromised. Please contact our support team immediately.",
    ],
    button: "Contact Support",
    outro: &[
        "For your security, we recommend:",
        "• Changing your password immediately",
        "• Reviewing your recent account activity",
        "• Enabling two-factor authentication if not already active",
    ],
    alternative: ALTERNATIVE_EN,
    footer: FOOTER_EN,
};

const EMAIL_CHANGE_NOTIFICATION_FR: TemplateText = TemplateText {
    subject: "Votre adresse e-mail a été modifiée - {{app_name}}",
    title: "Notification de Changement d'Adresse E-mail",
    greeting: "Bonjour",
    intro: &[
        "Nous vous informons que votre adresse e-mail a été modifiée avec succès.",
        "Ancienne adresse : {{old_email}}",
        "Nouvelle adresse : {{new_email}}",
        "Si vous avez effectué ce changement, aucune action supplémentaire n'est requise.",
        "Si vous n'avez pas demandé ce changement, votre compte pourrait être compromis. Veuillez contacter notre équipe de support immédiatement.",
    ],
    button: "Contacter le Support",
    outro: &[
        "Pour votre sécurité, nous recommandons :",
        "• Changer votre mot de passe immédiatement",
        "• Vérifier l'activité récente de votre compte",
        "• Activer l'authentification à deux facteurs si ce n'est pas déjà fait",
    ],
    alternative: ALTERNATIVE_FR,
    footer: FOOTER_FR,
};
