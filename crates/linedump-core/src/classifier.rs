//! 换行符分类状态机（逐字节、常数内存）
//!
//! 只记忆一位状态：上一个字节是否为尚未结算的 `0D`。
//! 因此 `0D 0A` 无论是在同一批次还是分两次送入，结果都完全一致，不需要前瞻或缓冲。
use crate::types::LineEndingStyle;

const LF: u8 = 0x0A;
const CR: u8 = 0x0D;

/// 换行符分类器
#[derive(Debug, Default, Clone)]
pub struct LineClassifier {
    pending_cr: bool,
    style: LineEndingStyle,
    closed: u64,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 处理一个字节；本字节关闭的行边界数通过 `acquire_and_reset_closed_count` 取出
    pub fn handle(&mut self, byte: u8) {
        self.step(Some(byte));
    }

    /// 流结束探针：结束标记按“非 0A、非 0D”处理，只会结算末尾悬空的 `0D`
    pub fn finish(&mut self) {
        self.step(None);
    }

    /// 取出并清零最近一个字节关闭的行边界数（每个字节调用一次）
    pub fn acquire_and_reset_closed_count(&mut self) -> u64 {
        std::mem::take(&mut self.closed)
    }

    /// 依次处理一段字节，返回关闭的行边界总数
    pub fn feed(&mut self, bytes: &[u8]) -> u64 {
        let mut total = 0;
        for &b in bytes {
            self.handle(b);
            total += self.acquire_and_reset_closed_count();
        }
        total
    }

    /// 当前分类结果
    pub fn style(&self) -> LineEndingStyle {
        self.style
    }

    /// 上一个字节是否为尚未结算的 `0D`
    pub fn pending_cr(&self) -> bool {
        self.pending_cr
    }

    fn step(&mut self, input: Option<u8>) {
        // 两次判断都基于进入时的 pending 值
        let pending = self.pending_cr;
        let is_lf = input == Some(LF);
        let is_cr = input == Some(CR);

        if is_lf || pending {
            self.closed = 1;
            let detected = match (is_lf, pending) {
                (true, true) => LineEndingStyle::CrLf,
                (true, false) => LineEndingStyle::Cr,
                _ => LineEndingStyle::Lf,
            };
            self.style = self.style.widen(detected);
            self.pending_cr = false;
        }
        if is_cr && pending {
            // 连续两个 0D：为前一个 0D 再关闭一个边界
            self.closed = 2;
            self.style = self.style.widen(LineEndingStyle::Lf);
            self.pending_cr = false;
        }
        if is_cr && !pending {
            self.pending_cr = true;
        }
    }
}
