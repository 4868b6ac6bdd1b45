use alloc::{boxed::Box, sync::Arc};
use core::any::{Any, TypeId};
use core::fmt;

#[cfg(feature = "std")]
use tracing::debug;

use crate::Result;
use crate::capability::SecurityCapabilities;
use crate::channel::{
    ChannelShape, InnerStack, SecuredChannelFactory, can_build_session_channel, inner_property,
};
use crate::error::SecurityError;
use crate::token::{TokenInclusion, TokenRequirement, TokenRequirementRegistry};

use super::family::BindingFamily;
use super::layout::HeaderLayout;
use super::settings::{IdentityVerifier, LocalClientSettings};
use super::version::{SecurityVersion, WsSecurity};

/// 消息级安全绑定的聚合根。
///
/// # 设计背景（Why）
/// - 一个端点的消息安全需求由多个维度拼合：家族（谁供给保护）、令牌登记表（谁参与签名
///   与背书）、策略版本、头布局与时间戳开关；聚合根把它们收敛为单一可克隆的值，向上
///   提供属性解析与通道工厂委托两个消费面；
/// - 生命周期分两段：配置阶段可变，交付通道工厂构造后视为只读。本类型不做内部加锁，
///   跨并发消费方共享前应先克隆。
///
/// # 契约说明（What）
/// - 版本经由 [`Arc`] 持有，不存在缺席状态；头布局恒为四个已定义值之一；
/// - 克隆语义见 [`Clone`] 实现：登记表与本地客户端策略深拷贝，版本共享引用；
/// - 相等语义见 [`PartialEq`] 实现：比较策略形状，本地客户端策略不参与。
pub struct MessageSecurityBinding {
    family: BindingFamily,
    registry: TokenRequirementRegistry,
    version: Arc<SecurityVersion>,
    header_layout: HeaderLayout,
    include_timestamp: bool,
    protect_tokens: bool,
    allow_insecure_transport: bool,
    require_signature_confirmation: bool,
    enable_unsecured_response: bool,
    client_settings: LocalClientSettings,
}

impl MessageSecurityBinding {
    /// 以给定家族与版本构造空白绑定。
    ///
    /// # 契约
    /// - 登记表四类为空；时间戳默认开启；令牌保护、不安全传输放行、签名确认与
    ///   非安全应答默认关闭；头布局默认严格排序。
    pub fn new(family: BindingFamily, version: Arc<SecurityVersion>) -> Self {
        Self {
            family,
            registry: TokenRequirementRegistry::new(),
            version,
            header_layout: HeaderLayout::default(),
            include_timestamp: true,
            protect_tokens: false,
            allow_insecure_transport: false,
            require_signature_confirmation: false,
            enable_unsecured_response: false,
            client_settings: LocalClientSettings::default(),
        }
    }

    /// 规范构造器：传输之上的用户名认证。
    ///
    /// # 组合形状
    /// - 传输安全家族；签名加密类别恰好一条用户名需求；时间戳开启；默认版本套件。
    /// - 对应识别器为 [`super::is_username_over_transport`]，二者的字段集合必须保持一致。
    pub fn username_over_transport() -> Self {
        let mut binding = Self::new(
            BindingFamily::TransportSecurity,
            SecurityVersion::default_suite(),
        );
        binding
            .registry
            .push_signed_encrypted(TokenRequirement::username());
        binding.include_timestamp = true;
        binding
    }

    /// 规范构造器：传输之上的证书背书。
    ///
    /// # 组合形状
    /// - 传输安全家族；背书类别恰好一条发往接收方的证书需求；时间戳开启。
    /// - 对应识别器为 [`super::is_certificate_over_transport`]，二者的字段集合必须保持一致。
    pub fn certificate_over_transport(version: Arc<SecurityVersion>) -> Self {
        let mut binding = Self::new(BindingFamily::TransportSecurity, version);
        binding.registry.push_endorsing(TokenRequirement::certificate());
        binding.include_timestamp = true;
        binding
    }

    /// 规范构造器：双向证书认证，默认不允许应答侧序列化签名令牌。
    pub fn mutual_certificate(version: Arc<SecurityVersion>) -> Self {
        Self::mutual_certificate_with(version, false)
    }

    /// 规范构造器：默认版本套件的双向证书认证。
    pub fn mutual_certificate_default() -> Self {
        Self::mutual_certificate(SecurityVersion::default_suite())
    }

    /// 规范构造器：双向证书认证，可放行应答侧序列化签名令牌。
    ///
    /// # 组合形状
    /// - WS-Security 1.0 套件或显式放行序列化签名令牌时走非对称家族：发起方证书随请求
    ///   送达接收方，接收方证书仅以引用出现；
    /// - 其余情况走对称家族：保护证书以引用出现，另登记一条发往接收方的背书证书；
    /// - 两条路径时间戳均开启。对应识别器为 [`super::is_mutual_certificate`]。
    pub fn mutual_certificate_with(
        version: Arc<SecurityVersion>,
        allow_serialized_signing_token_on_reply: bool,
    ) -> Self {
        let asymmetric =
            allow_serialized_signing_token_on_reply || version.security() == WsSecurity::V10;
        if asymmetric {
            Self::new(
                BindingFamily::AsymmetricMessageSecurity {
                    initiator_token: TokenRequirement::certificate_with_inclusion(
                        TokenInclusion::AlwaysToRecipient,
                    ),
                    recipient_token: TokenRequirement::certificate_with_inclusion(
                        TokenInclusion::Never,
                    ),
                },
                version,
            )
        } else {
            let mut binding = Self::new(
                BindingFamily::SymmetricMessageSecurity {
                    protection_token: TokenRequirement::certificate_with_inclusion(
                        TokenInclusion::Never,
                    ),
                },
                version,
            );
            binding.registry.push_endorsing(TokenRequirement::certificate());
            binding
        }
    }

    /// 规范构造器：在引导绑定之上建立安全会话。
    ///
    /// # 契约
    /// - 版本沿用引导绑定的 `Arc` 引用；登记表为空；时间戳开启。
    pub fn secure_conversation(bootstrap: MessageSecurityBinding) -> Self {
        let version = Arc::clone(&bootstrap.version);
        Self::new(
            BindingFamily::SecureConversation {
                bootstrap: Box::new(bootstrap),
            },
            version,
        )
    }

    /// 获取家族标签。
    pub fn family(&self) -> &BindingFamily {
        &self.family
    }

    /// 获取令牌登记表。
    pub fn registry(&self) -> &TokenRequirementRegistry {
        &self.registry
    }

    /// 配置阶段获取可变登记表。
    pub fn registry_mut(&mut self) -> &mut TokenRequirementRegistry {
        &mut self.registry
    }

    /// 获取策略版本引用。
    pub fn version(&self) -> &Arc<SecurityVersion> {
        &self.version
    }

    /// 替换策略版本。
    pub fn set_version(&mut self, version: Arc<SecurityVersion>) {
        self.version = version;
    }

    /// 获取头布局。
    pub fn header_layout(&self) -> HeaderLayout {
        self.header_layout
    }

    /// 设置头布局（类型化入口，恒合法）。
    pub fn set_header_layout(&mut self, layout: HeaderLayout) {
        self.header_layout = layout;
    }

    /// 以原始码设置头布局。
    ///
    /// # 错误
    /// - 码值越界时返回 [`SecurityError::UndefinedHeaderLayout`]，当前布局保持不变。
    pub fn set_header_layout_code(&mut self, code: u32) -> Result<()> {
        self.header_layout = HeaderLayout::from_code(code)?;
        Ok(())
    }

    /// 是否要求消息携带时间戳。
    pub fn include_timestamp(&self) -> bool {
        self.include_timestamp
    }

    /// 设置时间戳开关。
    pub fn set_include_timestamp(&mut self, include: bool) {
        self.include_timestamp = include;
    }

    /// 是否对令牌本身加保护。
    pub fn protect_tokens(&self) -> bool {
        self.protect_tokens
    }

    /// 设置令牌保护开关。
    pub fn set_protect_tokens(&mut self, protect: bool) {
        self.protect_tokens = protect;
    }

    /// 是否放行不安全传输。
    pub fn allow_insecure_transport(&self) -> bool {
        self.allow_insecure_transport
    }

    /// 设置不安全传输放行开关。
    pub fn set_allow_insecure_transport(&mut self, allow: bool) {
        self.allow_insecure_transport = allow;
    }

    /// 是否要求签名确认。
    pub fn require_signature_confirmation(&self) -> bool {
        self.require_signature_confirmation
    }

    /// 设置签名确认开关。
    pub fn set_require_signature_confirmation(&mut self, require: bool) {
        self.require_signature_confirmation = require;
    }

    /// 是否允许非安全应答。
    pub fn enable_unsecured_response(&self) -> bool {
        self.enable_unsecured_response
    }

    /// 设置非安全应答开关。
    pub fn set_enable_unsecured_response(&mut self, enable: bool) {
        self.enable_unsecured_response = enable;
    }

    /// 获取本地客户端策略。
    pub fn client_settings(&self) -> &LocalClientSettings {
        &self.client_settings
    }

    /// 配置阶段获取可变本地客户端策略。
    pub fn client_settings_mut(&mut self) -> &mut LocalClientSettings {
        &mut self.client_settings
    }

    /// 本层声明的能力集合（未与下层合并）。
    pub fn own_capabilities(&self) -> SecurityCapabilities {
        self.family.own_capabilities(&self.registry)
    }

    /// 与下层栈声明合并后的能力集合。
    ///
    /// # 执行逻辑（How）
    /// - 先由家族供给本层声明，再以下层栈暴露的 [`SecurityCapabilities`] 为内层操作数
    ///   执行不对称合并；下层未暴露能力时本层声明原样生效。
    pub fn security_capabilities(&self, context: &dyn InnerStack) -> SecurityCapabilities {
        let inner = inner_property::<SecurityCapabilities>(context);
        self.own_capabilities().merge_with_inner(inner.as_deref())
    }

    /// 逐层解析类型化属性。
    ///
    /// # 契约（What）
    /// - `T` 为 [`SecurityCapabilities`] 时返回与下层合并后的能力集合；
    /// - `T` 为 [`IdentityVerifier`] 时返回本地客户端策略中的校验器；
    /// - 其余类型委托下层栈继续解析，所有层均未解析时返回 `None`。
    pub fn resolve_property<T: Any + Send + Sync>(
        &self,
        context: &dyn InnerStack,
    ) -> Option<Arc<T>> {
        let key = TypeId::of::<T>();
        if key == TypeId::of::<SecurityCapabilities>() {
            let merged: Arc<dyn Any + Send + Sync> = Arc::new(self.security_capabilities(context));
            return merged.downcast::<T>().ok();
        }
        if key == TypeId::of::<IdentityVerifier>() {
            let verifier: Arc<dyn Any + Send + Sync> =
                Arc::new(self.client_settings.identity_verifier().clone());
            return verifier.downcast::<T>().ok();
        }
        context.property(key).and_then(|value| value.downcast::<T>().ok())
    }

    /// 给定形态能否在下层栈之上构建。
    ///
    /// # 执行逻辑（How）
    /// - 会话家族走表驱动的会话资格裁决；其余家族直接透传下层声明。
    pub fn can_build_channel(&self, shape: ChannelShape, context: &dyn InnerStack) -> bool {
        if self.family.session_mode() {
            can_build_session_channel(shape, context)
        } else {
            context.can_build(shape)
        }
    }

    /// 委托下层构造通道工厂，并附上合并后的能力集合。
    ///
    /// # 契约（What）
    /// - 资格裁决失败时返回 [`SecurityError::ShapeUnsupported`]，不触达下层栈；
    /// - 会话家族优先请求同模式裸形态（消息层自建会话语义），下层仅声明会话形态时原样请求；
    /// - 下层构造失败按契约原样上抛。
    pub fn build_channel_factory(
        &self,
        shape: ChannelShape,
        context: &dyn InnerStack,
    ) -> Result<SecuredChannelFactory> {
        if !self.can_build_channel(shape, context) {
            #[cfg(feature = "std")]
            debug!(
                family = self.family.label(),
                shape = %shape,
                "channel shape rejected by eligibility check"
            );
            return Err(SecurityError::ShapeUnsupported { shape });
        }

        let inner_shape = if self.family.session_mode() && context.can_build(shape.plain_form()) {
            shape.plain_form()
        } else {
            shape
        };
        let inner = context.build_channel_factory(inner_shape)?;
        Ok(SecuredChannelFactory::new(
            inner,
            shape,
            self.security_capabilities(context),
        ))
    }
}

impl Clone for MessageSecurityBinding {
    /// 显式克隆语义：登记表与本地客户端策略深拷贝，版本共享 `Arc` 引用。
    ///
    /// # 契约
    /// - 克隆后两份绑定的可变状态完全独立：修改克隆体的登记表或本地策略，原绑定不可见；
    /// - 版本侧写不可变，共享引用不构成状态泄漏。
    fn clone(&self) -> Self {
        Self {
            family: self.family.clone(),
            registry: self.registry.clone(),
            version: Arc::clone(&self.version),
            header_layout: self.header_layout,
            include_timestamp: self.include_timestamp,
            protect_tokens: self.protect_tokens,
            allow_insecure_transport: self.allow_insecure_transport,
            require_signature_confirmation: self.require_signature_confirmation,
            enable_unsecured_response: self.enable_unsecured_response,
            client_settings: self.client_settings.clone(),
        }
    }
}

impl PartialEq for MessageSecurityBinding {
    /// 策略形状相等：家族（含其令牌参数）、登记表、版本值、头布局与各开关逐项比较。
    ///
    /// # 语义说明
    /// - 本地客户端策略是端点运行时参数，不属于策略形状，刻意排除在相等判定之外；
    ///   结构识别器依赖该语义对规范构造产物做整体比对。
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.registry == other.registry
            && self.version == other.version
            && self.header_layout == other.header_layout
            && self.include_timestamp == other.include_timestamp
            && self.protect_tokens == other.protect_tokens
            && self.allow_insecure_transport == other.allow_insecure_transport
            && self.require_signature_confirmation == other.require_signature_confirmation
            && self.enable_unsecured_response == other.enable_unsecured_response
    }
}

impl Eq for MessageSecurityBinding {}

impl fmt::Debug for MessageSecurityBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSecurityBinding")
            .field("family", &self.family.label())
            .field("version", &self.version)
            .field("header_layout", &self.header_layout)
            .field("include_timestamp", &self.include_timestamp)
            .field("protect_tokens", &self.protect_tokens)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for MessageSecurityBinding {
    /// 多行诊断转储，面向排障与元数据导出的人读视图。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.family.label())?;
        writeln!(f, "  version: {}", self.version)?;
        writeln!(f, "  include-timestamp: {}", self.include_timestamp)?;
        writeln!(f, "  protect-tokens: {}", self.protect_tokens)?;
        writeln!(f, "  header-layout: {}", self.header_layout)?;
        writeln!(
            f,
            "  allow-insecure-transport: {}",
            self.allow_insecure_transport
        )?;
        writeln!(
            f,
            "  require-signature-confirmation: {}",
            self.require_signature_confirmation
        )?;
        writeln!(
            f,
            "  enable-unsecured-response: {}",
            self.enable_unsecured_response
        )?;
        write!(f, "  supporting tokens: {}", self.registry)
    }
}
